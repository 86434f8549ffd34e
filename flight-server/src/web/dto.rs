//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::ReducedPath;

/// Request body for `/calculate`: a list of `[source, destination]` flights.
///
/// Elements are kept as raw strings so that wrongly sized flights can be
/// reported instead of silently truncated.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CalculateRequest {
    pub flights: Vec<Vec<String>>,
}

/// Successful `/calculate` response: `["SFO","EWR"]`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CalculateResponse {
    pub path: ReducedPath,
}

impl From<ReducedPath> for CalculateResponse {
    fn from(path: ReducedPath) -> Self {
        Self { path }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
