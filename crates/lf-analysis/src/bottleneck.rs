//! Capacity diagnostics over a solved graph.
//!
//! Two independent ranked views:
//! - low-capacity edges: bounded edges whose capacity is at or below a
//!   threshold, whether or not they carry flow;
//! - saturated bottlenecks: bounded edges running exactly at capacity and
//!   below the saturation threshold — the true throughput limiters — each
//!   with a recommended capacity increase.
//!
//! Saturation uses exact equality: flow and capacity come out of the same
//! solve, which snaps exhausted edges to their capacity.

use lf_core::{NodeId, Real};
use lf_graph::{Graph, Tier};
use lf_solver::FlowAssignment;

use crate::attribution::Attribution;

/// Analyzer thresholds and report sizing.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Edges with capacity at or below this land in the low-capacity view.
    pub low_capacity_threshold: Real,
    /// Saturated edges strictly below this are reported as bottlenecks.
    pub saturation_threshold: Real,
    /// Truncation for the low-capacity view and the bottom-destinations list.
    pub top_n: usize,
    /// Multiplier for recommended capacity increases.
    pub recommend_factor: Real,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            low_capacity_threshold: 10.0,
            saturation_threshold: 20.0,
            top_n: 3,
            recommend_factor: 1.5,
        }
    }
}

/// One capacity-constrained edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Bottleneck {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Real,
    pub saturated: bool,
}

/// A saturated bottleneck with its suggested fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Real,
    pub recommended_capacity: Real,
}

/// The analyzer's full output.
#[derive(Debug, Clone, PartialEq)]
pub struct BottleneckReport {
    /// Ascending by (capacity, edge id), truncated to `top_n`.
    pub low_capacity: Vec<Bottleneck>,
    /// Ascending by (capacity, edge id), not truncated.
    pub saturated: Vec<Recommendation>,
    /// Origin with the largest attributed outflow, with that total.
    pub top_origin: Option<(NodeId, Real)>,
    /// Destinations with the smallest attributed inflow, ascending,
    /// truncated to `top_n`. Destinations that received nothing count as 0.
    pub bottom_destinations: Vec<(NodeId, Real)>,
}

/// Scan the solved graph for capacity constraints.
///
/// Pure function of its inputs: re-running it on the same solve yields an
/// identical report.
pub fn analyze(
    graph: &Graph,
    assignment: &FlowAssignment,
    attribution: &Attribution,
    config: &AnalyzerConfig,
) -> BottleneckReport {
    let mut low_capacity: Vec<(lf_core::EdgeId, Bottleneck)> = Vec::new();
    let mut saturated: Vec<(lf_core::EdgeId, Recommendation)> = Vec::new();

    for edge in graph.edges().iter().filter(|e| e.is_bounded()) {
        let flow = assignment.flow(edge.id);
        let is_saturated = flow == edge.capacity;

        if edge.capacity <= config.low_capacity_threshold {
            low_capacity.push((
                edge.id,
                Bottleneck {
                    from: edge.from,
                    to: edge.to,
                    capacity: edge.capacity,
                    saturated: is_saturated,
                },
            ));
        }

        if is_saturated && edge.capacity < config.saturation_threshold {
            saturated.push((
                edge.id,
                Recommendation {
                    from: edge.from,
                    to: edge.to,
                    capacity: edge.capacity,
                    recommended_capacity: edge.capacity * config.recommend_factor,
                },
            ));
        }
    }

    // Rank by capacity; edge ID breaks ties reproducibly.
    low_capacity.sort_by(|(ia, a), (ib, b)| {
        a.capacity
            .partial_cmp(&b.capacity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });
    low_capacity.truncate(config.top_n);
    saturated.sort_by(|(ia, a), (ib, b)| {
        a.capacity
            .partial_cmp(&b.capacity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });

    let top_origin = attribution
        .origin_totals()
        .iter()
        .fold(None::<(NodeId, Real)>, |best, (&id, &total)| match best {
            Some((_, t)) if t >= total => best,
            _ => Some((id, total)),
        });

    let mut bottom_destinations: Vec<(NodeId, Real)> = graph
        .nodes_in_tier(Tier::Destination)
        .map(|n| (n.id, attribution.destination_total(n.id)))
        .collect();
    bottom_destinations.sort_by(|(ia, a), (ib, b)| {
        a.partial_cmp(b)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });
    bottom_destinations.truncate(config.top_n);

    BottleneckReport {
        low_capacity: low_capacity.into_iter().map(|(_, b)| b).collect(),
        saturated: saturated.into_iter().map(|(_, r)| r).collect(),
        top_origin,
        bottom_destinations,
    }
}
