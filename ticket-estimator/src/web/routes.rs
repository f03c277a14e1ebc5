//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::{EstimateError, TrainState, TripRequest};
use crate::pricing::{FareProvider, available_seats};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: FareProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/estimate", post(estimate::<P>))
        .route("/seats/available", post(seats_available))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Price a trip request against the current local time.
async fn estimate<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<EstimateResponse>, AppError>
where
    P: FareProvider + Send + Sync + 'static,
{
    let price = state.estimator.estimate(&request).await?;
    Ok(Json(EstimateResponse { price }))
}

/// Count free seats on a train.
async fn seats_available(
    Json(train): Json<TrainState>,
) -> Result<Json<SeatsResponse>, AppError> {
    let available = available_seats(&train)?;
    Ok(Json(SeatsResponse { available }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Conflict { message: String },
    BadGateway { message: String },
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        let message = e.to_string();
        match e {
            EstimateError::InvalidInput(_) => AppError::BadRequest { message },
            EstimateError::TrainFull => AppError::Conflict { message },
            EstimateError::ApiFailure => AppError::BadGateway { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(status = status.as_u16(), error = %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
