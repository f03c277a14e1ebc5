//! Data transfer objects for web responses.
//!
//! Requests reuse the domain types directly, since they already carry
//! their JSON shape.

use serde::Serialize;

/// Price of a booking.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Total price, unrounded
    pub price: f64,
}

/// Free seats on a train.
#[derive(Debug, Serialize)]
pub struct SeatsResponse {
    pub available: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
