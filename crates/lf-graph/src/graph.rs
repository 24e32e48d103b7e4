//! Core graph data structures.

use lf_core::{EdgeId, NodeId, Real};

/// Logical layer a node belongs to.
///
/// Flow always moves SuperSource -> Origin -> Relay -> Destination -> SuperSink.
/// The two super tiers are synthetic: the builder adds them so a single-source
/// single-sink algorithm can solve a many-origin many-destination network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    SuperSource,
    Origin,
    Relay,
    Destination,
    SuperSink,
}

/// A node in the distribution network.
///
/// Nodes are minimal: an ID, a name for human reference, and a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub tier: Tier,
}

/// A directed capacitated edge.
///
/// Edges are unique per ordered `(from, to)` pair. Solved flow is *not*
/// stored here; the solver commits it once into a `FlowAssignment` so the
/// graph stays immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    /// Non-negative capacity. For synthetic super edges this holds the
    /// graph's capacity sentinel.
    pub capacity: Real,
    /// True for synthetic super-source/super-sink edges whose capacity is
    /// the sentinel, never a real constraint.
    pub unbounded: bool,
}

impl Edge {
    /// Whether this edge carries a real, finite capacity constraint.
    pub fn is_bounded(&self) -> bool {
        !self.unbounded
    }
}

/// The graph: a validated, immutable collection of nodes and edges.
///
/// The graph stores:
/// - All nodes and edges in vectors (indexed by their IDs).
/// - Compact adjacency in both directions: forward for traversal, reverse
///   for residual bookkeeping during solving.
///
/// Adjacency lists are ordered by edge insertion order, which makes every
/// traversal over the graph deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    pub(crate) source: NodeId,
    pub(crate) sink: NodeId,

    /// Numeric stand-in for "unbounded": strictly greater than the sum of
    /// all real capacities, computed at build time.
    pub(crate) capacity_sentinel: Real,

    /// Offsets for node->outgoing-edge adjacency: node i's edges are in
    /// out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<EdgeId>,

    /// Same shape for incoming edges.
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_edges: Vec<EdgeId>,
}

impl Graph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// The synthetic super source.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The synthetic super sink.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// The numeric "unbounded" capacity used on super edges.
    pub fn capacity_sentinel(&self) -> Real {
        self.capacity_sentinel
    }

    /// Outgoing edge IDs of a node, in insertion order.
    pub fn out_edges(&self, node_id: NodeId) -> &[EdgeId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        &self.out_edges[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Incoming edge IDs of a node, in insertion order.
    pub fn in_edges(&self, node_id: NodeId) -> &[EdgeId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        &self.in_edges[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Look up a node by name (linear scan; graphs here are small).
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.id)
    }

    /// Iterate over the nodes of one tier, in ID order.
    pub fn nodes_in_tier(&self, tier: Tier) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.tier == tier)
    }
}
