//! lf-graph: graph/model layer for logiflow.
//!
//! Provides:
//! - Core graph data structures (Tier, Node, Edge, Graph)
//! - Incremental network builder with validation and super-source /
//!   super-sink synthesis
//! - Serde-described topology input
//!
//! # Example
//!
//! ```
//! use lf_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! let a = builder.add_origin("Terminal 1").unwrap();
//! let w = builder.add_relay("Warehouse 1").unwrap();
//! let d = builder.add_destination("Store 1").unwrap();
//! builder.connect(a, w, 25.0).unwrap();
//! builder.connect(w, d, 15.0).unwrap();
//! let graph = builder.build().unwrap();
//!
//! // 3 real nodes + super source + super sink
//! assert_eq!(graph.nodes().len(), 5);
//! // 2 real edges + 1 source edge + 1 sink edge
//! assert_eq!(graph.edges().len(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::GraphError;
pub use graph::{Edge, Graph, Node, Tier};
pub use topology::{Topology, TopologyEdge};
