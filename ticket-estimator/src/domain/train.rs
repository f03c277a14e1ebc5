//! Train seat state.

use serde::{Deserialize, Serialize};

/// A seat on the train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Seat number
    pub number: u32,
    /// Whether the seat is free to book
    pub is_available: bool,
}

impl Seat {
    /// Creates a free seat.
    pub fn free(number: u32) -> Self {
        Self {
            number,
            is_available: true,
        }
    }

    /// Creates an occupied seat.
    pub fn taken(number: u32) -> Self {
        Self {
            number,
            is_available: false,
        }
    }
}

/// Seat state for the train being priced.
///
/// Read-only input: the estimator never reserves or locks seats.
/// When `is_full` is set the seat list is not consulted at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainState {
    /// Seats in carriage order
    #[serde(default)]
    pub seats: Vec<Seat>,

    /// Whether the operator has flagged the train as full
    #[serde(default)]
    pub is_full: bool,
}

impl TrainState {
    /// Creates a train that is not flagged full.
    pub fn new(seats: Vec<Seat>) -> Self {
        Self {
            seats,
            is_full: false,
        }
    }

    /// Creates a train flagged full.
    pub fn full(seats: Vec<Seat>) -> Self {
        Self {
            seats,
            is_full: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_train_details() {
        let json = r#"{
            "seats": [
                {"number": 1, "isAvailable": true},
                {"number": 2, "isAvailable": false}
            ],
            "isFull": false
        }"#;

        let train: TrainState = serde_json::from_str(json).unwrap();

        assert!(!train.is_full);
        assert_eq!(train.seats, vec![Seat::free(1), Seat::taken(2)]);
    }

    #[test]
    fn missing_fields_default_to_empty_not_full() {
        let train: TrainState = serde_json::from_str("{}").unwrap();
        assert_eq!(train, TrainState::default());
        assert!(!train.is_full);
        assert!(train.seats.is_empty());
    }

    #[test]
    fn serialize_uses_camel_case() {
        let train = TrainState::full(vec![Seat::taken(7)]);
        let json = serde_json::to_value(&train).unwrap();

        assert_eq!(json["isFull"], true);
        assert_eq!(json["seats"][0]["number"], 7);
        assert_eq!(json["seats"][0]["isAvailable"], false);
    }
}
