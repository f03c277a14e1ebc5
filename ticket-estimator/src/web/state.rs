//! Application state for the web layer.

use std::sync::Arc;

use crate::fares::FareClient;
use crate::pricing::Estimator;

/// Shared application state.
///
/// Generic over the fare provider so the router can be driven by a mock
/// in tests.
pub struct AppState<P = FareClient> {
    /// Ticket estimator
    pub estimator: Arc<Estimator<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(estimator: Estimator<P>) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            estimator: Arc::clone(&self.estimator),
        }
    }
}
