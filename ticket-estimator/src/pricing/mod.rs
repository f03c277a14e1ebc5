//! Ticket pricing.
//!
//! Turns a single base fare from the pricing service into the price of a
//! whole booking:
//!
//! validate → fetch base fare → price each passenger → sum → group discount
//!
//! Every stage except the fetch is a pure function of the request, the base
//! fare, the reference time and the [`PricingRules`].

mod estimator;
mod group;
mod passenger;
mod rules;
mod seats;
mod validate;


pub use estimator::{Estimator, FareProvider};
pub use group::apply_group_discount;
pub use passenger::{days_until, price_for};
pub use rules::PricingRules;
pub use seats::available_seats;
pub use validate::{TripCheck, validate};
