//! Web layer for the flight path service.
//!
//! Provides the HTTP endpoint that validates a flight list and reduces it
//! to the overall trip.

mod dto;
mod routes;
mod state;
mod validate;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use validate::{ValidationError, validate_flights};
