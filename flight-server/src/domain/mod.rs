//! Domain types for the flight path service.
//!
//! These types represent validated flight data. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod airport;
mod segment;

pub use airport::{AirportCode, InvalidAirportCode};
pub use segment::{InvalidSegment, ReducedPath, Segment};
