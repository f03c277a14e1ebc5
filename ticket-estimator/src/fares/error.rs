//! Pricing service error types.

use crate::domain::EstimateError;

/// Errors that can occur when fetching a base fare.
#[derive(Debug, thiserror::Error)]
pub enum FareApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response had no usable price
    #[error("response has no positive price")]
    MissingPrice,
}

// Callers of the estimator never see transport detail.
impl From<FareApiError> for EstimateError {
    fn from(_: FareApiError) -> Self {
        EstimateError::ApiFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FareApiError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FareApiError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        assert_eq!(
            FareApiError::MissingPrice.to_string(),
            "response has no positive price"
        );
    }

    #[test]
    fn collapses_to_api_failure() {
        let err: EstimateError = FareApiError::Api {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(err, EstimateError::ApiFailure);

        let err: EstimateError = FareApiError::MissingPrice.into();
        assert_eq!(err, EstimateError::ApiFailure);
    }
}
