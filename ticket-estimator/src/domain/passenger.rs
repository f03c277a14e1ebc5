//! Passenger and discount card types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A discount card a passenger may hold.
///
/// Serialized by variant name, e.g. `"HalfCouple"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountCard {
    /// Senior card, only effective for passengers in the senior age tier.
    Senior,
    /// Rail employee card. Fixes the passenger's fare.
    TrainStroke,
    /// Couple card, effective when exactly two adults travel together.
    Couple,
    /// Half-couple card, effective for a single adult travelling alone.
    HalfCouple,
}

/// A single traveller on a trip request.
///
/// Age is signed so that a negative age can be represented and rejected
/// by the pricing rules instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    /// Age in whole years
    pub age: i32,

    /// Discount cards held
    #[serde(default)]
    pub discounts: HashSet<DiscountCard>,

    /// Family surname, reserved for family-card pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Passenger {
    /// Creates a passenger of the given age holding no cards.
    pub fn new(age: i32) -> Self {
        Self {
            age,
            discounts: HashSet::new(),
            last_name: None,
        }
    }

    /// Adds a discount card.
    pub fn with_card(mut self, card: DiscountCard) -> Self {
        self.discounts.insert(card);
        self
    }

    /// Sets the family surname.
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Returns true if the passenger holds `card`.
    pub fn holds(&self, card: DiscountCard) -> bool {
        self.discounts.contains(&card)
    }
}
