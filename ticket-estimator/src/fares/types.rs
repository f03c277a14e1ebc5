//! Pricing service response DTOs.

use serde::Deserialize;

use super::error::FareApiError;

/// Response body of the price estimate endpoint.
///
/// The service sometimes omits `price` or sends `null`; both are treated
/// as a failed lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    pub price: Option<f64>,
}

impl PriceResponse {
    /// Returns the base fare, rejecting missing, zero, negative or
    /// non-finite prices.
    pub fn base_fare(&self) -> Result<f64, FareApiError> {
        match self.price {
            Some(price) if price.is_finite() && price > 0.0 => Ok(price),
            _ => Err(FareApiError::MissingPrice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_price() {
        let resp: PriceResponse = serde_json::from_str(r#"{"price": 42.5}"#).unwrap();
        assert_eq!(resp.base_fare().unwrap(), 42.5);
    }

    #[test]
    fn extra_fields_ignored() {
        let resp: PriceResponse =
            serde_json::from_str(r#"{"price": 100, "currency": "EUR", "from": "Paris"}"#)
                .unwrap();
        assert_eq!(resp.base_fare().unwrap(), 100.0);
    }

    #[test]
    fn missing_or_null_price_rejected() {
        let resp: PriceResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(resp.base_fare(), Err(FareApiError::MissingPrice)));

        let resp: PriceResponse = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert!(matches!(resp.base_fare(), Err(FareApiError::MissingPrice)));
    }

    #[test]
    fn non_positive_price_rejected() {
        let resp: PriceResponse = serde_json::from_str(r#"{"price": 0}"#).unwrap();
        assert!(matches!(resp.base_fare(), Err(FareApiError::MissingPrice)));

        let resp: PriceResponse = serde_json::from_str(r#"{"price": -1}"#).unwrap();
        assert!(matches!(resp.base_fare(), Err(FareApiError::MissingPrice)));
    }

    #[test]
    fn string_price_is_a_parse_error() {
        let result: Result<PriceResponse, _> = serde_json::from_str(r#"{"price": "100"}"#);
        assert!(result.is_err());
    }
}
