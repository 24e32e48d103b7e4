//! Integration tests for the max-flow solver on the reference logistics
//! network: 2 origins, 4 relays, 14 destinations.

use lf_core::{EdgeId, Real, Tolerances};
use lf_graph::{Graph, NetworkBuilder};
use lf_solver::{solve, verify_conservation, verify_feasibility};

/// Origin->relay edge IDs in construction order:
/// A->W1:25, A->W2:20, A->W3:15, B->W3:15, B->W4:30, B->W2:10.
fn reference_network() -> (Graph, Vec<EdgeId>) {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_origin("Terminal 1").unwrap();
    let b = builder.add_origin("Terminal 2").unwrap();
    let w1 = builder.add_relay("Warehouse 1").unwrap();
    let w2 = builder.add_relay("Warehouse 2").unwrap();
    let w3 = builder.add_relay("Warehouse 3").unwrap();
    let w4 = builder.add_relay("Warehouse 4").unwrap();
    let stores: Vec<_> = (1..=14)
        .map(|i| builder.add_destination(format!("Store {}", i)).unwrap())
        .collect();

    let inbound = vec![
        builder.connect(a, w1, 25.0).unwrap(),
        builder.connect(a, w2, 20.0).unwrap(),
        builder.connect(a, w3, 15.0).unwrap(),
        builder.connect(b, w3, 15.0).unwrap(),
        builder.connect(b, w4, 30.0).unwrap(),
        builder.connect(b, w2, 10.0).unwrap(),
    ];

    let outbound: [(usize, usize, Real); 14] = [
        (0, 1, 15.0),
        (0, 2, 10.0),
        (0, 3, 20.0),
        (1, 4, 15.0),
        (1, 5, 10.0),
        (1, 6, 25.0),
        (2, 7, 20.0),
        (2, 8, 15.0),
        (2, 9, 10.0),
        (3, 10, 20.0),
        (3, 11, 10.0),
        (3, 12, 15.0),
        (3, 13, 5.0),
        (3, 14, 10.0),
    ];
    let relays = [w1, w2, w3, w4];
    for (w, s, cap) in outbound {
        builder.connect(relays[w], stores[s - 1], cap).unwrap();
    }

    (builder.build().unwrap(), inbound)
}

#[test]
fn reference_network_total_flow_is_115() {
    let (graph, _) = reference_network();
    let assignment = solve(&graph, None).unwrap();
    assert_eq!(assignment.total(), 115.0);
}

#[test]
fn every_origin_relay_edge_saturates() {
    // The origin->relay layer is the minimum cut: its capacities sum to 115
    // while every relay can move at least its own inflow onward. At the
    // optimum each of those edges is filled exactly.
    let (graph, inbound) = reference_network();
    let assignment = solve(&graph, None).unwrap();

    for id in inbound {
        let edge = graph.edge(id).unwrap();
        assert_eq!(assignment.flow(id), edge.capacity, "edge {} not saturated", id);
    }
}

#[test]
fn relay_inflows_match_expected_split() {
    let (graph, _) = reference_network();
    let assignment = solve(&graph, None).unwrap();

    let expected = [
        ("Warehouse 1", 25.0),
        ("Warehouse 2", 30.0),
        ("Warehouse 3", 30.0),
        ("Warehouse 4", 30.0),
    ];
    for (name, want) in expected {
        let node = graph.find_node(name).unwrap();
        let inflow: Real = graph
            .in_edges(node)
            .iter()
            .map(|&e| assignment.flow(e))
            .sum();
        assert_eq!(inflow, want, "{} inflow", name);
    }
}

#[test]
fn solved_reference_network_conserves_flow() {
    let (graph, _) = reference_network();
    let assignment = solve(&graph, None).unwrap();
    let tol = Tolerances::default();

    verify_conservation(&graph, &assignment, tol).unwrap();
    verify_feasibility(&graph, &assignment, tol).unwrap();
}

#[test]
fn super_edges_never_bind() {
    let (graph, _) = reference_network();
    let assignment = solve(&graph, None).unwrap();

    for edge in graph.edges().iter().filter(|e| !e.is_bounded()) {
        assert!(assignment.flow(edge.id) < graph.capacity_sentinel());
    }
}

#[test]
fn reanalysis_is_deterministic() {
    let (graph, _) = reference_network();
    let first = solve(&graph, None).unwrap();
    let second = solve(&graph, None).unwrap();
    assert_eq!(first, second);
}
