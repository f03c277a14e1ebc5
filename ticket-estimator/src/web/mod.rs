//! Web layer for the ticket estimator.
//!
//! Provides HTTP endpoints for pricing trips and checking seat availability.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
