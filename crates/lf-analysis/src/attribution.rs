//! Proportional origin -> destination flow attribution.
//!
//! A single-commodity max-flow only yields per-edge totals: once flow from
//! several origins merges at a relay, unit identity is gone. This module
//! recovers an *approximate* decomposition by assuming proportional mixing
//! at every relay: each origin's inflow is split across the relay's
//! outgoing edges in proportion to each edge's share of the relay's total
//! outflow. That is a modeling choice, not a solver-verified quantity — the
//! numbers here must never be conflated with the exact edge flows.

use std::collections::BTreeMap;

use lf_core::{NodeId, Real};
use lf_graph::{Graph, Tier};
use lf_solver::FlowAssignment;

/// Attributed flow per (origin, destination) pair, plus derived totals.
///
/// All maps are `BTreeMap`s keyed by ID, so iteration order is fixed and
/// repeated runs produce identical tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribution {
    pairs: BTreeMap<(NodeId, NodeId), Real>,
    origin_totals: BTreeMap<NodeId, Real>,
    destination_totals: BTreeMap<NodeId, Real>,
}

impl Attribution {
    /// Attributed quantity for one (origin, destination) pair.
    pub fn attributed(&self, origin: NodeId, destination: NodeId) -> Real {
        self.pairs.get(&(origin, destination)).copied().unwrap_or(0.0)
    }

    /// All positive attributions, ordered by (origin, destination) ID.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId, Real)> + '_ {
        self.pairs.iter().map(|(&(o, d), &v)| (o, d, v))
    }

    /// Total attributed outflow of one origin.
    pub fn origin_total(&self, origin: NodeId) -> Real {
        self.origin_totals.get(&origin).copied().unwrap_or(0.0)
    }

    /// Total attributed inflow of one destination.
    pub fn destination_total(&self, destination: NodeId) -> Real {
        self.destination_totals
            .get(&destination)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn origin_totals(&self) -> &BTreeMap<NodeId, Real> {
        &self.origin_totals
    }

    pub fn destination_totals(&self) -> &BTreeMap<NodeId, Real> {
        &self.destination_totals
    }
}

/// Decompose the solved relay-tier flows into origin -> destination
/// contributions.
///
/// For every relay r with positive total outflow, and every origin o with
/// positive flow into r:
///
/// ```text
/// attributed(o, d) += flow(o->r) * flow(r->d) / total_outflow(r)
/// ```
///
/// Relays with zero outflow contribute nothing (and never divide by zero).
/// `total_outflow(r)` is computed once per relay; the nested per-pair
/// recomputation the formula suggests would give the same result.
pub fn attribute(graph: &Graph, assignment: &FlowAssignment) -> Attribution {
    let mut result = Attribution::default();

    for relay in graph.nodes_in_tier(Tier::Relay) {
        let total_outflow: Real = graph
            .out_edges(relay.id)
            .iter()
            .map(|&e| assignment.flow(e))
            .sum();
        if total_outflow <= 0.0 {
            continue;
        }

        for &in_edge in graph.in_edges(relay.id) {
            let inflow = assignment.flow(in_edge);
            if inflow <= 0.0 {
                continue;
            }
            let origin = graph.edges()[in_edge.index() as usize].from;

            for &out_edge in graph.out_edges(relay.id) {
                let outflow = assignment.flow(out_edge);
                if outflow <= 0.0 {
                    continue;
                }
                let destination = graph.edges()[out_edge.index() as usize].to;
                let share = inflow * outflow / total_outflow;
                *result.pairs.entry((origin, destination)).or_insert(0.0) += share;
            }
        }
    }

    for (&(origin, destination), &share) in &result.pairs {
        *result.origin_totals.entry(origin).or_insert(0.0) += share;
        *result.destination_totals.entry(destination).or_insert(0.0) += share;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::{nearly_equal, Tolerances};
    use lf_graph::NetworkBuilder;
    use lf_solver::solve;
    use proptest::prelude::*;

    #[test]
    fn merge_at_relay_splits_proportionally() {
        // A:6 and B:3 merge at W, which fans out 6 to D1 and 3 to D2.
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let b = builder.add_origin("B").unwrap();
        let w = builder.add_relay("W").unwrap();
        let d1 = builder.add_destination("D1").unwrap();
        let d2 = builder.add_destination("D2").unwrap();
        builder.connect(a, w, 6.0).unwrap();
        builder.connect(b, w, 3.0).unwrap();
        builder.connect(w, d1, 6.0).unwrap();
        builder.connect(w, d2, 3.0).unwrap();
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        assert_eq!(assignment.total(), 9.0);

        let attribution = attribute(&graph, &assignment);
        // A contributes 6 of 9 units; two thirds of each destination's flow.
        assert_eq!(attribution.attributed(a, d1), 4.0);
        assert_eq!(attribution.attributed(a, d2), 2.0);
        assert_eq!(attribution.attributed(b, d1), 2.0);
        assert_eq!(attribution.attributed(b, d2), 1.0);
        assert_eq!(attribution.origin_total(a), 6.0);
        assert_eq!(attribution.destination_total(d1), 6.0);
    }

    #[test]
    fn attribution_mass_is_conserved_per_origin() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let b = builder.add_origin("B").unwrap();
        let w1 = builder.add_relay("W1").unwrap();
        let w2 = builder.add_relay("W2").unwrap();
        let d1 = builder.add_destination("D1").unwrap();
        let d2 = builder.add_destination("D2").unwrap();
        builder.connect(a, w1, 7.0).unwrap();
        builder.connect(a, w2, 5.0).unwrap();
        builder.connect(b, w2, 4.0).unwrap();
        builder.connect(w1, d1, 9.0).unwrap();
        builder.connect(w2, d1, 3.0).unwrap();
        builder.connect(w2, d2, 8.0).unwrap();
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        let attribution = attribute(&graph, &assignment);
        let tol = Tolerances::default();

        for origin in [a, b] {
            let solved_outflow: f64 = graph
                .out_edges(origin)
                .iter()
                .map(|&e| assignment.flow(e))
                .sum();
            assert!(
                nearly_equal(attribution.origin_total(origin), solved_outflow, tol),
                "origin {} attribution {} != solved {}",
                origin,
                attribution.origin_total(origin),
                solved_outflow
            );
        }
    }

    #[test]
    fn zero_outflow_relay_is_skipped() {
        // W2 receives nothing and sends nothing; it must not divide by zero
        // or appear in the attribution.
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let w1 = builder.add_relay("W1").unwrap();
        let w2 = builder.add_relay("W2").unwrap();
        let d = builder.add_destination("D").unwrap();
        builder.connect(a, w1, 5.0).unwrap();
        builder.connect(a, w2, 0.0).unwrap();
        builder.connect(w1, d, 5.0).unwrap();
        builder.connect(w2, d, 4.0).unwrap();
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        let attribution = attribute(&graph, &assignment);

        assert_eq!(attribution.attributed(a, d), 5.0);
        assert_eq!(attribution.pairs().count(), 1);
    }

    proptest! {
        #[test]
        fn attribution_never_exceeds_total(
            caps in proptest::collection::vec(0u8..=20, 2..=6),
            out_caps in proptest::collection::vec(1u8..=20, 1..=4),
        ) {
            let mut builder = NetworkBuilder::new();
            let w = builder.add_relay("W").unwrap();
            for (i, &c) in caps.iter().enumerate() {
                let o = builder.add_origin(format!("O{}", i)).unwrap();
                builder.connect(o, w, c as f64).unwrap();
            }
            for (i, &c) in out_caps.iter().enumerate() {
                let d = builder.add_destination(format!("D{}", i)).unwrap();
                builder.connect(w, d, c as f64).unwrap();
            }
            let graph = builder.build().unwrap();
            let assignment = solve(&graph, None).unwrap();
            let attribution = attribute(&graph, &assignment);

            let attributed: f64 = attribution.pairs().map(|(_, _, v)| v).sum();
            prop_assert!(attributed <= assignment.total() + 1e-6);
        }
    }

    #[test]
    fn disconnected_network_attributes_nothing() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let w = builder.add_relay("W").unwrap();
        builder.add_destination("D").unwrap();
        builder.connect(a, w, 5.0).unwrap();
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        let attribution = attribute(&graph, &assignment);
        assert_eq!(attribution.pairs().count(), 0);
    }
}
