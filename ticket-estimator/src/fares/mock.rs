//! Mock pricing client for testing without the pricing service.
//!
//! Serves a fixed base fare (or a fixed failure) and records every lookup
//! so tests can check how often and with what the service was queried.

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::pricing::FareProvider;

use super::error::FareApiError;

/// A recorded base fare lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareQuery {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
}

/// Mock pricing client.
///
/// Clones share the same query log.
#[derive(Debug, Clone)]
pub struct MockFareClient {
    /// Fare to return, or `None` to fail every lookup.
    price: Option<f64>,

    queries: Arc<Mutex<Vec<FareQuery>>>,
}

impl MockFareClient {
    /// A client that always returns `price`.
    pub fn fixed(price: f64) -> Self {
        Self {
            price: Some(price),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A client whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            price: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of lookups made so far.
    pub fn call_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// All lookups made so far, oldest first.
    pub fn queries(&self) -> Vec<FareQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl FareProvider for MockFareClient {
    async fn base_fare(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDateTime,
    ) -> Result<f64, FareApiError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(FareQuery {
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure,
            });
        }

        self.price.ok_or_else(|| FareApiError::Api {
            status: 500,
            message: "mock pricing failure".to_string(),
        })
    }
}
