//! The bundled sample topology: a two-terminal, four-warehouse,
//! fourteen-store logistics network.
//!
//! Useful as a demo and as a known-answer fixture: its maximum flow is 115,
//! bounded by the terminal->warehouse layer (25 + 30 + 30 + 30 of warehouse
//! inflow capacity).

use lf_graph::{Topology, TopologyEdge};

/// Build the sample logistics topology.
pub fn sample_topology() -> Topology {
    Topology {
        origins: vec!["Terminal 1".into(), "Terminal 2".into()],
        relays: (1..=4).map(|i| format!("Warehouse {}", i)).collect(),
        destinations: (1..=14).map(|i| format!("Store {}", i)).collect(),
        origin_to_relay: vec![
            TopologyEdge::new("Terminal 1", "Warehouse 1", 25.0),
            TopologyEdge::new("Terminal 1", "Warehouse 2", 20.0),
            TopologyEdge::new("Terminal 1", "Warehouse 3", 15.0),
            TopologyEdge::new("Terminal 2", "Warehouse 3", 15.0),
            TopologyEdge::new("Terminal 2", "Warehouse 4", 30.0),
            TopologyEdge::new("Terminal 2", "Warehouse 2", 10.0),
        ],
        relay_to_destination: vec![
            TopologyEdge::new("Warehouse 1", "Store 1", 15.0),
            TopologyEdge::new("Warehouse 1", "Store 2", 10.0),
            TopologyEdge::new("Warehouse 1", "Store 3", 20.0),
            TopologyEdge::new("Warehouse 2", "Store 4", 15.0),
            TopologyEdge::new("Warehouse 2", "Store 5", 10.0),
            TopologyEdge::new("Warehouse 2", "Store 6", 25.0),
            TopologyEdge::new("Warehouse 3", "Store 7", 20.0),
            TopologyEdge::new("Warehouse 3", "Store 8", 15.0),
            TopologyEdge::new("Warehouse 3", "Store 9", 10.0),
            TopologyEdge::new("Warehouse 4", "Store 10", 20.0),
            TopologyEdge::new("Warehouse 4", "Store 11", 10.0),
            TopologyEdge::new("Warehouse 4", "Store 12", 15.0),
            TopologyEdge::new("Warehouse 4", "Store 13", 5.0),
            TopologyEdge::new("Warehouse 4", "Store 14", 10.0),
        ],
    }
}
