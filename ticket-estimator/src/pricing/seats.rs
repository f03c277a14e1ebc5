//! Seat availability.

use crate::domain::{EstimateError, TrainState};

/// Count the free seats on a train.
///
/// A train flagged full is rejected without looking at its seats. A train
/// that is not flagged full may still have zero free seats; that is
/// returned as `Ok(0)`.
pub fn available_seats(train: &TrainState) -> Result<usize, EstimateError> {
    if train.is_full {
        return Err(EstimateError::TrainFull);
    }

    Ok(train.seats.iter().filter(|seat| seat.is_available).count())
}
