//! Per-passenger fare rules.
//!
//! A passenger's fare is built from the base fare in a fixed order:
//!
//! 1. age validity (negative ages rejected, infants ride free)
//! 2. age tier multiplier, with the Senior card reduction
//! 3. adjustment for how far ahead of departure the booking is made
//! 4. flat fare for young children
//! 5. flat fare for TrainStroke card holders
//!
//! Steps 4 and 5 replace whatever steps 2 and 3 produced.

use chrono::NaiveDateTime;

use crate::domain::{DiscountCard, EstimateError, Passenger, TripRequest};

use super::rules::PricingRules;
use super::seats::available_seats;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until `departure`, rounded up.
///
/// A departure 1 ms away is 1 day away; a departure at `now` or earlier
/// today is 0 or fewer.
pub fn days_until(departure: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let millis = (departure - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Price one passenger's ticket.
///
/// Fails with `InvalidInput` for a negative age, and with `TrainFull` when
/// the same-day rule needs seat availability from a train flagged full.
pub fn price_for(
    passenger: &Passenger,
    base_fare: f64,
    request: &TripRequest,
    now: NaiveDateTime,
    rules: &PricingRules,
) -> Result<f64, EstimateError> {
    if passenger.age < 0 {
        return Err(EstimateError::InvalidInput("Age is invalid"));
    }
    if passenger.age < 1 {
        return Ok(0.0);
    }

    let mut price = age_tier_price(passenger, base_fare, rules);
    price += proximity_adjustment(base_fare, request, now, rules)?;

    if passenger.age < rules.young_child_age_limit {
        price = rules.young_child_fare;
    }

    if passenger.holds(DiscountCard::TrainStroke) {
        price = rules.employee_fare;
    }

    Ok(price)
}

fn age_tier_price(passenger: &Passenger, base_fare: f64, rules: &PricingRules) -> f64 {
    if rules.is_minor(passenger.age) {
        base_fare * rules.minor_rate
    } else if passenger.age >= rules.senior_min_age {
        let mut price = base_fare * rules.senior_rate;
        if passenger.holds(DiscountCard::Senior) {
            price -= base_fare * rules.senior_card_discount;
        }
        price
    } else {
        base_fare * rules.adult_rate
    }
}

/// Amount added to (or, when negative, removed from) the fare depending on
/// how close departure is.
fn proximity_adjustment(
    base_fare: f64,
    request: &TripRequest,
    now: NaiveDateTime,
    rules: &PricingRules,
) -> Result<f64, EstimateError> {
    let departure = request.details.departure;
    let days = days_until(departure, now);

    if days >= rules.early_booking_days {
        return Ok(-base_fare * rules.early_booking_discount);
    }

    if days > rules.daily_curve_floor_days {
        let days_from_pivot = (rules.daily_curve_pivot_days - days) as f64;
        return Ok(days_from_pivot * rules.daily_curve_rate * base_fare);
    }

    // Seat lookup only happens for same-day departures, so a full train
    // only fails the estimate here.
    if days < 1
        && available_seats(&request.train)? > 0
        && departure - now <= rules.last_minute_window()
    {
        return Ok(-base_fare * rules.last_minute_discount);
    }

    Ok(base_fare * rules.late_booking_surcharge)
}
