//! Pricing rule configuration.

use chrono::Duration;

/// Rates, thresholds and fixed fares used by the pricing rules.
///
/// Rates are fractions of the base fare.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Oldest age priced as a minor.
    pub minor_max_age: i32,

    /// Youngest age priced as a senior.
    pub senior_min_age: i32,

    /// Age tier multipliers.
    pub minor_rate: f64,
    pub adult_rate: f64,
    pub senior_rate: f64,

    /// Extra reduction for seniors holding a Senior card.
    pub senior_card_discount: f64,

    /// Bookings at least this many days ahead get the early booking discount.
    pub early_booking_days: i64,
    pub early_booking_discount: f64,

    /// Between `daily_curve_floor_days` (exclusive) and `early_booking_days`
    /// (exclusive) the fare moves by `daily_curve_rate` per day away from
    /// `daily_curve_pivot_days`.
    pub daily_curve_floor_days: i64,
    pub daily_curve_pivot_days: i64,
    pub daily_curve_rate: f64,

    /// Same-day departures inside this window, with a free seat, are discounted.
    pub last_minute_window_hours: i64,
    pub last_minute_discount: f64,

    /// Surcharge for bookings close to departure that get no other adjustment.
    pub late_booking_surcharge: f64,

    /// Passengers strictly younger than this (and older than an infant) pay
    /// `young_child_fare`.
    pub young_child_age_limit: i32,
    pub young_child_fare: f64,

    /// Flat fare for TrainStroke card holders.
    pub employee_fare: f64,

    /// Couple discount, applied once per passenger of the couple.
    pub couple_discount: f64,

    /// Half-couple discount for a single adult.
    pub half_couple_discount: f64,
}

impl PricingRules {
    /// Returns the last-minute window as a Duration.
    pub fn last_minute_window(&self) -> Duration {
        Duration::hours(self.last_minute_window_hours)
    }

    /// Returns true if `age` is priced as a minor.
    pub fn is_minor(&self, age: i32) -> bool {
        age <= self.minor_max_age
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            minor_max_age: 17,
            senior_min_age: 70,
            minor_rate: 0.6,
            adult_rate: 1.2,
            senior_rate: 0.8,
            senior_card_discount: 0.2,
            early_booking_days: 30,
            early_booking_discount: 0.2,
            daily_curve_floor_days: 5,
            daily_curve_pivot_days: 20,
            daily_curve_rate: 0.02,
            last_minute_window_hours: 6,
            last_minute_discount: 0.2,
            late_booking_surcharge: 1.0,
            young_child_age_limit: 4,
            young_child_fare: 9.0,
            employee_fare: 1.0,
            couple_discount: 0.2,
            half_couple_discount: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = PricingRules::default();

        assert_eq!(rules.minor_max_age, 17);
        assert_eq!(rules.senior_min_age, 70);
        assert_eq!(rules.minor_rate, 0.6);
        assert_eq!(rules.adult_rate, 1.2);
        assert_eq!(rules.senior_rate, 0.8);
        assert_eq!(rules.early_booking_days, 30);
        assert_eq!(rules.daily_curve_floor_days, 5);
        assert_eq!(rules.daily_curve_pivot_days, 20);
        assert_eq!(rules.young_child_fare, 9.0);
        assert_eq!(rules.employee_fare, 1.0);
        assert_eq!(rules.couple_discount, 0.2);
        assert_eq!(rules.half_couple_discount, 0.1);
    }

    #[test]
    fn duration_methods() {
        let rules = PricingRules::default();
        assert_eq!(rules.last_minute_window(), Duration::hours(6));
    }

    #[test]
    fn minor_boundary() {
        let rules = PricingRules::default();
        assert!(rules.is_minor(0));
        assert!(rules.is_minor(17));
        assert!(!rules.is_minor(18));
    }

    #[test]
    fn custom_rules() {
        let rules = PricingRules {
            young_child_fare: 5.0,
            last_minute_window_hours: 2,
            ..PricingRules::default()
        };

        assert_eq!(rules.young_child_fare, 5.0);
        assert_eq!(rules.last_minute_window(), Duration::hours(2));
        assert_eq!(rules.employee_fare, 1.0);
    }
}
