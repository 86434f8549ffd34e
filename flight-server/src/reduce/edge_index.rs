//! Edge index: one outgoing edge per source airport.
//!
//! Nodes live in an arena in first-seen input order, with a hash map from
//! airport code to arena slot. Keeping the arena ordered makes every later
//! traversal deterministic, so the same input always reports the same error.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::{AirportCode, Segment};

use super::error::ReduceError;

/// Position of a node in the [`EdgeIndex`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Reduction progress of a single source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not yet reached by any traversal.
    Unvisited,
    /// Walked through; the destination may be stale.
    Visited,
    /// Root of a fully resolved chain: the destination is the chain's end.
    Head,
}

/// One source airport and the destination it currently points at.
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) source: AirportCode,
    pub(super) destination: AirportCode,
    pub(super) state: NodeState,
}

/// Mapping from each source airport to its single outgoing edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    nodes: Vec<Node>,
    slots: HashMap<AirportCode, NodeId>,
}

impl EdgeIndex {
    /// Build the index from segments in input order.
    ///
    /// Fails on the first segment whose source already has an edge:
    /// `RepeatedEntry` if the destination matches, `AmbiguousDestination`
    /// otherwise.
    pub fn build(segments: &[Segment]) -> Result<Self, ReduceError> {
        let mut index = EdgeIndex {
            nodes: Vec::with_capacity(segments.len()),
            slots: HashMap::with_capacity(segments.len()),
        };

        for seg in segments {
            match index.slots.entry(seg.source) {
                Entry::Occupied(slot) => {
                    let recorded = index.nodes[slot.get().0].destination;
                    if recorded == seg.destination {
                        return Err(ReduceError::RepeatedEntry {
                            origin: seg.source,
                            destination: seg.destination,
                        });
                    }
                    return Err(ReduceError::AmbiguousDestination {
                        origin: seg.source,
                        first: recorded,
                        second: seg.destination,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(NodeId(index.nodes.len()));
                    index.nodes.push(Node {
                        source: seg.source,
                        destination: seg.destination,
                        state: NodeState::Unvisited,
                    });
                }
            }
        }

        Ok(index)
    }

    /// Number of source airports in the index.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no segments were indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current reduction state of `source`, if it has an outgoing edge.
    pub fn state_of(&self, source: &AirportCode) -> Option<NodeState> {
        self.lookup(source).map(|id| self.node(id).state)
    }

    /// Destination `source` currently points at, if it has an outgoing edge.
    pub fn destination_of(&self, source: &AirportCode) -> Option<AirportCode> {
        self.lookup(source).map(|id| self.node(id).destination)
    }

    /// Iterate over source airports in first-seen order.
    pub fn sources(&self) -> impl Iterator<Item = AirportCode> + '_ {
        self.nodes.iter().map(|n| n.source)
    }

    pub(super) fn lookup(&self, code: &AirportCode) -> Option<NodeId> {
        self.slots.get(code).copied()
    }

    pub(super) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
