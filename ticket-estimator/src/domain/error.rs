//! Estimate error types.
//!
//! These are the only failures a caller of the estimator sees. Transport
//! detail from the pricing service is collapsed into `ApiFailure` before it
//! reaches this layer.

/// Errors that abort a ticket estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// The trip request is malformed (empty city, past date, negative age)
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Seat availability was queried on a train flagged as full
    #[error("Train is full")]
    TrainFull,

    /// The base fare could not be obtained from the pricing service
    #[error("Api error")]
    ApiFailure,
}
