//! Serde-described topology input.
//!
//! A `Topology` is the caller-facing description of a network: three ordered
//! name lists and two capacitated edge lists. List order matters — it fixes
//! node and edge IDs, and therefore the deterministic traversal order of
//! everything downstream.

use serde::{Deserialize, Serialize};

use lf_core::Real;

use crate::builder::NetworkBuilder;
use crate::error::GraphError;
use crate::graph::Graph;

/// One capacitated connection, endpoints referenced by node name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub from: String,
    pub to: String,
    pub capacity: Real,
}

impl TopologyEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: Real) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }
}

/// A complete three-tier topology description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub origins: Vec<String>,
    pub relays: Vec<String>,
    pub destinations: Vec<String>,
    pub origin_to_relay: Vec<TopologyEdge>,
    pub relay_to_destination: Vec<TopologyEdge>,
}

impl Topology {
    /// Resolve names and build the validated graph.
    ///
    /// Fails if an edge references a name absent from every tier list, or if
    /// any capacity is negative — no partial graph is built.
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut builder = NetworkBuilder::new();
        for name in &self.origins {
            builder.add_origin(name.clone())?;
        }
        for name in &self.relays {
            builder.add_relay(name.clone())?;
        }
        for name in &self.destinations {
            builder.add_destination(name.clone())?;
        }
        for edge in self.origin_to_relay.iter().chain(&self.relay_to_destination) {
            let from = builder
                .node_by_name(&edge.from)
                .ok_or_else(|| GraphError::UnknownNode {
                    name: edge.from.clone(),
                })?;
            let to = builder
                .node_by_name(&edge.to)
                .ok_or_else(|| GraphError::UnknownNode {
                    name: edge.to.clone(),
                })?;
            builder.connect(from, to, edge.capacity)?;
        }
        builder.build()
    }
}
