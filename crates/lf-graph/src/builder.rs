//! Incremental network builder.

use std::collections::{HashMap, HashSet};

use lf_core::{ensure_finite, EdgeId, NodeId, Real};

use crate::error::GraphError;
use crate::graph::{Edge, Graph, Node, Tier};
use crate::validate;

/// Builder for constructing a tiered network incrementally.
///
/// Use `add_origin` / `add_relay` / `add_destination` and `connect` to lay
/// out the real topology, then call `build()` to validate it, synthesize the
/// super source and super sink, and freeze everything into an immutable
/// `Graph`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_name: HashMap<String, NodeId>,
    pairs: HashSet<(NodeId, NodeId)>,
    next_node_id: u32,
    next_edge_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an origin-tier node and return its ID.
    pub fn add_origin(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        self.add_node(name.into(), Tier::Origin)
    }

    /// Add a relay-tier node and return its ID.
    pub fn add_relay(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        self.add_node(name.into(), Tier::Relay)
    }

    /// Add a destination-tier node and return its ID.
    pub fn add_destination(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        self.add_node(name.into(), Tier::Destination)
    }

    fn add_node(&mut self, name: String, tier: Tier) -> Result<NodeId, GraphError> {
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode { name });
        }
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node { id, name, tier });
        Ok(id)
    }

    /// Look up a previously added node by name.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Add a capacitated edge between two real nodes.
    ///
    /// Only Origin->Relay and Relay->Destination connections are valid; the
    /// capacity must be finite and non-negative; at most one edge may exist
    /// per ordered pair.
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: Real,
    ) -> Result<EdgeId, GraphError> {
        let from_tier = self.tier_of(from)?;
        let to_tier = self.tier_of(to)?;
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }
        match (from_tier, to_tier) {
            (Tier::Origin, Tier::Relay) | (Tier::Relay, Tier::Destination) => {}
            _ => return Err(GraphError::TierMismatch { from, to }),
        }
        ensure_finite(capacity, "edge capacity")
            .map_err(|_| GraphError::NonFiniteCapacity { from, to })?;
        if capacity < 0.0 {
            return Err(GraphError::NegativeCapacity { from, to, capacity });
        }
        if !self.pairs.insert((from, to)) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        Ok(self.push_edge(from, to, capacity, false))
    }

    fn tier_of(&self, node: NodeId) -> Result<Tier, GraphError> {
        self.nodes
            .get(node.index() as usize)
            .map(|n| n.tier)
            .ok_or(GraphError::NodeOutOfRange { node })
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, capacity: Real, unbounded: bool) -> EdgeId {
        let id = EdgeId::from_index(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            from,
            to,
            capacity,
            unbounded,
        });
        id
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This synthesizes the super source and super sink, computes the
    /// capacity sentinel, constructs compact adjacency lists and validates
    /// everything.
    ///
    /// The sentinel is the sum of all real capacities plus one: strictly
    /// greater than any feasible flow, so a super edge can never be the
    /// binding constraint. True infinity is deliberately avoided so residual
    /// arithmetic stays finite.
    pub fn build(mut self) -> Result<Graph, GraphError> {
        let capacity_sentinel: Real =
            self.edges.iter().map(|e| e.capacity).sum::<Real>() + 1.0;

        let source = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id: source,
            name: "__source".to_string(),
            tier: Tier::SuperSource,
        });
        let sink = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id: sink,
            name: "__sink".to_string(),
            tier: Tier::SuperSink,
        });

        // Super edges in node insertion order, so edge IDs (and therefore
        // solver traversal order) are reproducible.
        let origins: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.tier == Tier::Origin)
            .map(|n| n.id)
            .collect();
        let destinations: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.tier == Tier::Destination)
            .map(|n| n.id)
            .collect();
        for o in origins {
            self.push_edge(source, o, capacity_sentinel, true);
        }
        for d in destinations {
            self.push_edge(d, sink, capacity_sentinel, true);
        }

        validate::validate_structure(&self.nodes, &self.edges)?;

        let (out_offsets, out_edges) =
            Self::build_adjacency(&self.nodes, &self.edges, |e| e.from);
        let (in_offsets, in_edges) = Self::build_adjacency(&self.nodes, &self.edges, |e| e.to);

        validate::validate_adjacency(&self.nodes, &self.edges, &out_offsets, &out_edges, true)?;
        validate::validate_adjacency(&self.nodes, &self.edges, &in_offsets, &in_edges, false)?;

        Ok(Graph {
            nodes: self.nodes,
            edges: self.edges,
            source,
            sink,
            capacity_sentinel,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        })
    }

    /// Build compact adjacency lists keyed by one endpoint of each edge.
    fn build_adjacency(
        nodes: &[Node],
        edges: &[Edge],
        endpoint: impl Fn(&Edge) -> NodeId,
    ) -> (Vec<usize>, Vec<EdgeId>) {
        // Group edges by node, keeping insertion order within each group.
        let mut node_to_edges: HashMap<NodeId, Vec<EdgeId>> = HashMap::new();
        for edge in edges {
            node_to_edges.entry(endpoint(edge)).or_default().push(edge.id);
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::new();
        offsets.push(0);

        for node in nodes {
            if let Some(list) = node_to_edges.get(&node.id) {
                flat.extend_from_slice(list);
            }
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
