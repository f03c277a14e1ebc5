//! Domain types for ticket pricing.
//!
//! All types here are request-scoped: the caller builds them, the pricing
//! rules read them, and nothing is kept after an estimate completes.

mod error;
mod passenger;
mod train;
mod trip;

pub use error::EstimateError;
pub use passenger::{DiscountCard, Passenger};
pub use train::{Seat, TrainState};
pub use trip::{TripDetails, TripRequest};
