//! Flight path reduction.
//!
//! This module implements the core algorithm that answers: "given these
//! unordered flight segments, where does the whole trip start and end?"
//!
//! Reduction runs in two stages. The [`EdgeIndex`] records one outgoing
//! edge per source and rejects duplicate or conflicting segments. The
//! [`PathReducer`] then compresses every chain onto its first airport and
//! checks that exactly one chain remains.

mod edge_index;
mod error;
mod reducer;

pub use edge_index::{EdgeIndex, NodeId, NodeState};
pub use error::ReduceError;
pub use reducer::{PathReducer, reduce_flight_path};
