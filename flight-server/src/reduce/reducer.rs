//! Path reducer.
//!
//! Collapses every chain in an [`EdgeIndex`] onto its first source using
//! union-find style path compression. Each walk starts at an unvisited
//! source and repeatedly re-points that source at its destination's
//! destination, marking every node it passes as visited. A walk ends when
//! it falls off the index (a terminal airport) or meets the head of a chain
//! that was already resolved, which it then absorbs.
//!
//! Meeting a node that is visited but not a head means two paths converge on
//! it or the walk has looped back on itself; both are ambiguous sources.

use tracing::{debug, trace};

use crate::domain::{ReducedPath, Segment};

use super::edge_index::{EdgeIndex, NodeId, NodeState};
use super::error::ReduceError;

/// Reduces a built [`EdgeIndex`] to a single end-to-end path.
#[derive(Debug)]
pub struct PathReducer {
    index: EdgeIndex,
}

impl PathReducer {
    /// Create a reducer that takes ownership of a freshly built index.
    pub fn new(index: EdgeIndex) -> Self {
        Self { index }
    }

    /// Walk every source, then collect the single surviving head.
    pub fn reduce(mut self) -> Result<ReducedPath, ReduceError> {
        self.compress()?;
        self.single_head()
    }

    /// Walk every still-unvisited source in first-seen order.
    ///
    /// On success every chain has collapsed into exactly one head.
    pub fn compress(&mut self) -> Result<(), ReduceError> {
        for id in (0..self.index.len()).map(NodeId) {
            self.walk(id)?;
        }
        Ok(())
    }

    /// The index in its current (possibly partially reduced) state.
    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// Compress the chain starting at `start` into a head.
    fn walk(&mut self, start: NodeId) -> Result<(), ReduceError> {
        if self.index.node(start).state != NodeState::Unvisited {
            return Ok(());
        }
        self.index.node_mut(start).state = NodeState::Visited;

        // Invariant: the start node's destination is always `curr`.
        let mut curr = self.index.node(start).destination;
        loop {
            let Some(next) = self.index.lookup(&curr) else {
                // `curr` has no outgoing edge: end of the chain.
                self.index.node_mut(start).state = NodeState::Head;
                trace!(source = %self.index.node(start).source, destination = %curr, "chain ends");
                return Ok(());
            };

            let next_node = self.index.node(next);
            let (next_state, next_destination) = (next_node.state, next_node.destination);
            match next_state {
                NodeState::Head => {
                    // Absorb the resolved chain; `next` is no longer a root.
                    self.index.node_mut(next).state = NodeState::Visited;
                    let node = self.index.node_mut(start);
                    node.destination = next_destination;
                    node.state = NodeState::Head;
                    trace!(
                        source = %node.source,
                        absorbed = %curr,
                        destination = %next_destination,
                        "absorbed existing head"
                    );
                    return Ok(());
                }
                NodeState::Visited => {
                    return Err(ReduceError::AmbiguousSource {
                        destination: next_destination,
                    });
                }
                NodeState::Unvisited => {
                    self.index.node_mut(next).state = NodeState::Visited;
                    self.index.node_mut(start).destination = next_destination;
                    curr = next_destination;
                }
            }
        }
    }

    /// Exactly one head must remain once every source has been walked.
    fn single_head(&self) -> Result<ReducedPath, ReduceError> {
        let mut heads = (0..self.index.len())
            .map(NodeId)
            .map(|id| self.index.node(id))
            .filter(|node| node.state == NodeState::Head);

        let Some(head) = heads.next() else {
            return Err(ReduceError::NoSegments);
        };
        if let Some(other) = heads.next() {
            return Err(ReduceError::MultipleSources {
                first: head.source,
                second: other.source,
            });
        }

        Ok(ReducedPath::new(head.source, head.destination))
    }
}

/// Reduce a set of flight segments to the overall trip they describe.
///
/// Segments may be supplied in any order. When several structural problems
/// exist at once, the one reported is the first met while scanning in input
/// order, so repeated calls with the same input report the same error.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{AirportCode, Segment};
/// use flight_server::reduce::reduce_flight_path;
///
/// let segments = [
///     Segment::parse("ATL", "LAX").unwrap(),
///     Segment::parse("JFK", "ATL").unwrap(),
/// ];
/// let path = reduce_flight_path(&segments).unwrap();
/// assert_eq!(path.source, AirportCode::parse("JFK").unwrap());
/// assert_eq!(path.destination, AirportCode::parse("LAX").unwrap());
/// ```
pub fn reduce_flight_path(segments: &[Segment]) -> Result<ReducedPath, ReduceError> {
    let result = EdgeIndex::build(segments).and_then(|index| PathReducer::new(index).reduce());

    match &result {
        Ok(path) => debug!(segments = segments.len(), %path, "reduced flight path"),
        Err(e) => debug!(segments = segments.len(), error = %e, "flight path rejected"),
    }

    result
}
