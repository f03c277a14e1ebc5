//! Group discounts applied to the booking total.

use crate::domain::{DiscountCard, Passenger};

use super::rules::PricingRules;

/// Apply couple and half-couple discounts to the summed passenger fares.
///
/// - two passengers, at least one Couple card: both get the couple discount
/// - one passenger with a HalfCouple card: the half-couple discount
///
/// Any minor in the booking cancels the discount for everyone.
pub fn apply_group_discount(
    total: f64,
    passengers: &[Passenger],
    base_fare: f64,
    rules: &PricingRules,
) -> f64 {
    if passengers.iter().any(|p| rules.is_minor(p.age)) {
        return total;
    }

    let holds = |card| passengers.iter().any(|p| p.holds(card));

    match passengers.len() {
        2 if holds(DiscountCard::Couple) => total - base_fare * rules.couple_discount * 2.0,
        1 if holds(DiscountCard::HalfCouple) => total - base_fare * rules.half_couple_discount,
        _ => total,
    }
}
