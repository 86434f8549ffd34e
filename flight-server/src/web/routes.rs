//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::reduce::{ReduceError, reduce_flight_path};

use super::dto::*;
use super::state::AppState;
use super::validate::{ValidationError, validate_flights};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", get(calculate).post(calculate))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Reduce the posted flights to the overall source and destination.
///
/// Accepted on both GET and POST; the flight list is always the JSON body.
async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: CalculateRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "unparsable request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let segments = validate_flights(&req.flights, state.config.max_segments)?;
    let path = reduce_flight_path(&segments)?;

    info!(flights = segments.len(), %path, "calculated flight path");
    Ok(Json(path.into()))
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such route".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ReduceError> for AppError {
    fn from(e: ReduceError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = status.as_u16(), %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
