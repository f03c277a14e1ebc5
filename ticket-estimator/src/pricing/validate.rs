//! Trip request validation.

use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::{EstimateError, TripRequest};

/// Outcome of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripCheck {
    /// No passengers: the price is zero and nothing else was checked.
    NothingToPrice,
    /// The request can be priced.
    Priceable,
}

/// Validate a trip request against the current local time `now`.
///
/// Checks run in a fixed order and the first failure wins. An empty
/// passenger list short-circuits before the city and date checks.
pub fn validate(request: &TripRequest, now: NaiveDateTime) -> Result<TripCheck, EstimateError> {
    if request.passengers.is_empty() {
        return Ok(TripCheck::NothingToPrice);
    }

    let details = &request.details;

    if details.origin.trim().is_empty() {
        return Err(EstimateError::InvalidInput("Start city is invalid"));
    }

    if details.destination.trim().is_empty() {
        return Err(EstimateError::InvalidInput("Destination city is invalid"));
    }

    let start_of_today = now.date().and_time(NaiveTime::MIN);
    if details.departure < start_of_today {
        return Err(EstimateError::InvalidInput("Date is invalid"));
    }

    Ok(TripCheck::Priceable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Passenger, TripDetails};
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    fn request(from: &str, to: &str, when: NaiveDateTime) -> TripRequest {
        TripRequest::new(TripDetails::new(from, to, when), vec![Passenger::new(25)])
    }

    #[test]
    fn valid_request() {
        let req = request("Paris", "Lyon", now() + Duration::days(3));
        assert_eq!(validate(&req, now()), Ok(TripCheck::Priceable));
    }

    #[test]
    fn empty_passengers_skip_all_checks() {
        // Short-circuit happens before city and date validation.
        let req = TripRequest::new(
            TripDetails::new("", "  ", now() - Duration::days(400)),
            vec![],
        );
        assert_eq!(validate(&req, now()), Ok(TripCheck::NothingToPrice));
    }

    #[test]
    fn blank_origin_rejected() {
        for origin in ["", "   ", "\t\n"] {
            let req = request(origin, "Lyon", now());
            assert_eq!(
                validate(&req, now()),
                Err(EstimateError::InvalidInput("Start city is invalid"))
            );
        }
    }

    #[test]
    fn blank_destination_rejected() {
        let req = request("Paris", " ", now());
        assert_eq!(
            validate(&req, now()),
            Err(EstimateError::InvalidInput("Destination city is invalid"))
        );
    }

    #[test]
    fn origin_checked_before_destination() {
        let req = request("", "", now());
        assert_eq!(
            validate(&req, now()),
            Err(EstimateError::InvalidInput("Start city is invalid"))
        );
    }

    #[test]
    fn cities_checked_before_date() {
        let req = request("Paris", "", now() - Duration::days(2));
        assert_eq!(
            validate(&req, now()),
            Err(EstimateError::InvalidInput("Destination city is invalid"))
        );
    }

    #[test]
    fn yesterday_rejected() {
        let yesterday_late = now().date().and_hms_opt(0, 0, 0).unwrap() - Duration::seconds(1);
        let req = request("Paris", "Lyon", yesterday_late);
        assert_eq!(
            validate(&req, now()),
            Err(EstimateError::InvalidInput("Date is invalid"))
        );
    }

    #[test]
    fn earlier_today_accepted() {
        // Day granularity: a departure that already left today is still valid.
        let midnight = now().date().and_hms_opt(0, 0, 0).unwrap();
        let req = request("Paris", "Lyon", midnight);
        assert_eq!(validate(&req, now()), Ok(TripCheck::Priceable));
    }
}
