//! Trip request types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Passenger, TrainState};

/// Where and when the trip goes.
///
/// The departure is a local wall-clock time. JSON field names follow the
/// pricing service's query parameters (`from`, `to`, `when`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    /// Origin city
    #[serde(rename = "from")]
    pub origin: String,

    /// Destination city
    #[serde(rename = "to")]
    pub destination: String,

    /// Departure date and time
    #[serde(rename = "when")]
    pub departure: NaiveDateTime,
}

impl TripDetails {
    /// Creates trip details.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDateTime,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure,
        }
    }
}

/// Everything needed to price one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Route and departure
    pub details: TripDetails,

    /// Travellers, in booking order
    #[serde(default)]
    pub passengers: Vec<Passenger>,

    /// Seat state of the train
    #[serde(default, rename = "trainDetails")]
    pub train: TrainState,
}

impl TripRequest {
    /// Creates a request for a train that is not full and has no seat data.
    pub fn new(details: TripDetails, passengers: Vec<Passenger>) -> Self {
        Self {
            details,
            passengers,
            train: TrainState::default(),
        }
    }

    /// Replaces the train seat state.
    pub fn with_train(mut self, train: TrainState) -> Self {
        self.train = train;
        self
    }
}
