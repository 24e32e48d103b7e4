//! Integration tests for lf-graph.

use lf_graph::{NetworkBuilder, Tier, Topology, TopologyEdge};

#[test]
fn build_minimal_network() {
    // Build: A -> W -> D plus synthetic super tiers.
    let mut builder = NetworkBuilder::new();
    let a = builder.add_origin("A").unwrap();
    let w = builder.add_relay("W").unwrap();
    let d = builder.add_destination("D").unwrap();
    let e_aw = builder.connect(a, w, 10.0).unwrap();
    let e_wd = builder.connect(w, d, 8.0).unwrap();

    let graph = builder.build().unwrap();

    assert_eq!(graph.nodes().len(), 5);
    assert_eq!(graph.edges().len(), 4);

    // Real edges keep their construction IDs and capacities.
    let aw = graph.edge(e_aw).unwrap();
    assert_eq!(aw.from, a);
    assert_eq!(aw.to, w);
    assert_eq!(aw.capacity, 10.0);
    assert!(aw.is_bounded());

    let wd = graph.edge(e_wd).unwrap();
    assert_eq!(wd.capacity, 8.0);

    // Super tiers are wired to every origin and destination.
    assert_eq!(graph.node(graph.source()).unwrap().tier, Tier::SuperSource);
    assert_eq!(graph.node(graph.sink()).unwrap().tier, Tier::SuperSink);
    assert_eq!(graph.out_edges(graph.source()), &[graph.edges()[2].id]);
    assert_eq!(graph.in_edges(graph.sink()), &[graph.edges()[3].id]);
    assert_eq!(graph.edges()[2].to, a);
    assert_eq!(graph.edges()[3].from, d);
}

#[test]
fn adjacency_is_consistent_both_ways() {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_origin("A").unwrap();
    let b = builder.add_origin("B").unwrap();
    let w1 = builder.add_relay("W1").unwrap();
    let w2 = builder.add_relay("W2").unwrap();
    let d = builder.add_destination("D").unwrap();
    builder.connect(a, w1, 4.0).unwrap();
    builder.connect(a, w2, 6.0).unwrap();
    builder.connect(b, w2, 3.0).unwrap();
    builder.connect(w1, d, 4.0).unwrap();
    builder.connect(w2, d, 9.0).unwrap();

    let graph = builder.build().unwrap();

    // Every forward listing has a matching reverse listing.
    for node in graph.nodes() {
        for &eid in graph.out_edges(node.id) {
            let edge = graph.edge(eid).unwrap();
            assert_eq!(edge.from, node.id);
            assert!(graph.in_edges(edge.to).contains(&eid));
        }
        for &eid in graph.in_edges(node.id) {
            let edge = graph.edge(eid).unwrap();
            assert_eq!(edge.to, node.id);
            assert!(graph.out_edges(edge.from).contains(&eid));
        }
    }

    // Relay W2 merges two origins and fans out to one destination.
    assert_eq!(graph.in_edges(w2).len(), 2);
    assert_eq!(graph.out_edges(w2).len(), 1);
}

#[test]
fn adjacency_preserves_insertion_order() {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_origin("A").unwrap();
    let w1 = builder.add_relay("W1").unwrap();
    let w2 = builder.add_relay("W2").unwrap();
    let w3 = builder.add_relay("W3").unwrap();
    let e1 = builder.connect(a, w2, 1.0).unwrap();
    let e2 = builder.connect(a, w1, 1.0).unwrap();
    let e3 = builder.connect(a, w3, 1.0).unwrap();

    let graph = builder.build().unwrap();

    // Out-edges come back in the order they were connected, not sorted by
    // target: the solver's determinism contract depends on this.
    assert_eq!(graph.out_edges(a), &[e1, e2, e3]);
}

#[test]
fn topology_description_matches_builder() {
    let topo = Topology {
        origins: vec!["A".into()],
        relays: vec!["W".into()],
        destinations: vec!["D1".into(), "D2".into()],
        origin_to_relay: vec![TopologyEdge::new("A", "W", 7.0)],
        relay_to_destination: vec![
            TopologyEdge::new("W", "D1", 3.0),
            TopologyEdge::new("W", "D2", 4.0),
        ],
    };
    let graph = topo.build().unwrap();

    assert_eq!(graph.nodes().len(), 6);
    // 3 real + 1 source edge + 2 sink edges
    assert_eq!(graph.edges().len(), 6);
    assert_eq!(graph.capacity_sentinel(), 15.0);
}
