//! Ticket estimate orchestration.

use std::future::Future;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::domain::{EstimateError, TripRequest};
use crate::fares::FareApiError;

use super::group::apply_group_discount;
use super::passenger::price_for;
use super::rules::PricingRules;
use super::validate::{TripCheck, validate};

/// Trait for looking up base fares.
///
/// This abstraction allows the estimator to be tested with a stub in place
/// of the pricing service.
pub trait FareProvider {
    /// Get the unadjusted fare from `origin` to `destination` departing at
    /// `departure`.
    fn base_fare(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDateTime,
    ) -> impl Future<Output = Result<f64, FareApiError>> + Send;
}

/// Prices trip requests.
///
/// Holds no per-request state; one estimator can serve any number of
/// concurrent estimates.
#[derive(Debug, Clone)]
pub struct Estimator<P> {
    provider: P,
    rules: PricingRules,
}

impl<P: FareProvider> Estimator<P> {
    /// Create an estimator with the default pricing rules.
    pub fn new(provider: P) -> Self {
        Self::with_rules(provider, PricingRules::default())
    }

    /// Create an estimator with custom pricing rules.
    pub fn with_rules(provider: P, rules: PricingRules) -> Self {
        Self { provider, rules }
    }

    /// The fare provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The pricing rules in use.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Price a trip request against the local clock.
    pub async fn estimate(&self, request: &TripRequest) -> Result<f64, EstimateError> {
        self.estimate_at(request, Local::now().naive_local()).await
    }

    /// Price a trip request as if the current local time were `now`.
    ///
    /// The base fare is fetched once and shared by every passenger. Any
    /// error aborts the whole estimate; partial totals are never returned.
    pub async fn estimate_at(
        &self,
        request: &TripRequest,
        now: NaiveDateTime,
    ) -> Result<f64, EstimateError> {
        if validate(request, now)? == TripCheck::NothingToPrice {
            return Ok(0.0);
        }

        let details = &request.details;
        let base_fare = self
            .provider
            .base_fare(&details.origin, &details.destination, details.departure)
            .await?;

        if !(base_fare.is_finite() && base_fare > 0.0) {
            return Err(EstimateError::ApiFailure);
        }

        let total = request
            .passengers
            .iter()
            .map(|passenger| price_for(passenger, base_fare, request, now, &self.rules))
            .sum::<Result<f64, _>>()?;

        let total = apply_group_discount(total, &request.passengers, base_fare, &self.rules);

        debug!(
            passengers = request.passengers.len(),
            base_fare, total, "estimate complete"
        );

        Ok(total)
    }
}
