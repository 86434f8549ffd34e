//! Reduction error types.
//!
//! Every variant is terminal: the input is malformed or ambiguous, so
//! retrying the same segments always fails the same way.

use crate::domain::AirportCode;

/// Structural reasons a set of segments does not form a single path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// The same segment was supplied twice
    #[error("Repeated entry: [{origin}, {destination}]")]
    RepeatedEntry {
        origin: AirportCode,
        destination: AirportCode,
    },

    /// One source departs to two different destinations
    #[error("Source {origin} has at least two destinations: {first}, {second}")]
    AmbiguousDestination {
        origin: AirportCode,
        first: AirportCode,
        second: AirportCode,
    },

    /// A traversal ran into an already-walked chain (converging paths or a cycle)
    #[error(
        "Destination {destination} has ambiguous source (multiple sources or path cycle)"
    )]
    AmbiguousSource { destination: AirportCode },

    /// The segments form more than one disconnected chain
    #[error("At least two possible sources: {first}, {second}")]
    MultipleSources {
        first: AirportCode,
        second: AirportCode,
    },

    /// There was nothing to reduce
    #[error("No flights supplied")]
    NoSegments,
}
