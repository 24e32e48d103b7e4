//! High-level solver interface.

use std::collections::VecDeque;

use lf_core::{EdgeId, Real};
use lf_graph::{Graph, Tier};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::residual::ResidualNetwork;

/// Max-flow solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Cap on the number of augmenting paths. Edmonds–Karp terminates in at
    /// most O(V·E) augmentations on any well-formed graph; the cap exists so
    /// pathological real-valued capacities surface as an error instead of a
    /// silent near-optimal answer.
    pub max_augmentations: usize,
    /// Residual capacities at or below this are treated as exhausted.
    pub eps: Real,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_augmentations: 100_000,
            eps: 1e-9,
        }
    }
}

/// The solved flow: one value per edge, aligned with edge IDs.
///
/// Produced exactly once per solve; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAssignment {
    total: Real,
    flows: Vec<Real>,
    augmentations: usize,
}

impl FlowAssignment {
    /// Total source-to-sink flow.
    pub fn total(&self) -> Real {
        self.total
    }

    /// Flow on one edge (panics if the ID is not from the solved graph).
    pub fn flow(&self, id: EdgeId) -> Real {
        self.flows[id.index() as usize]
    }

    /// All per-edge flows, indexed by edge ID.
    pub fn flows(&self) -> &[Real] {
        &self.flows
    }

    /// Number of augmenting paths applied.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }
}

/// Solve the maximum super-source -> super-sink flow.
///
/// Repeated breadth-first search for the shortest augmenting path in the
/// residual network, pushing the bottleneck residual along each path found,
/// until no path remains. Arcs are explored in edge insertion order, so the
/// result is reproducible down to the last bit.
///
/// A disconnected source/sink is not an error: the result is a valid
/// all-zero assignment.
pub fn solve(graph: &Graph, config: Option<SolverConfig>) -> SolverResult<FlowAssignment> {
    let cfg = config.unwrap_or_default();

    let source = graph.source();
    let sink = graph.sink();
    match graph.node(source) {
        Some(n) if n.tier == Tier::SuperSource => {}
        _ => {
            return Err(SolverError::ProblemSetup {
                what: format!("Node {} is not a super source", source),
            })
        }
    }
    match graph.node(sink) {
        Some(n) if n.tier == Tier::SuperSink => {}
        _ => {
            return Err(SolverError::ProblemSetup {
                what: format!("Node {} is not a super sink", sink),
            })
        }
    }

    let s = source.index() as usize;
    let t = sink.index() as usize;
    let mut res = ResidualNetwork::from_graph(graph);
    let mut parent: Vec<Option<usize>> = vec![None; res.node_count()];

    let mut total: Real = 0.0;
    let mut augmentations = 0usize;

    while bfs(&res, s, t, cfg.eps, &mut parent) {
        if augmentations >= cfg.max_augmentations {
            return Err(SolverError::AugmentationCapExceeded {
                limit: cfg.max_augmentations,
                pushed: total,
            });
        }

        // Walk sink -> source once for the bottleneck, once to apply it.
        let mut bottleneck = Real::INFINITY;
        let mut v = t;
        while v != s {
            let arc_idx = chain_arc(&parent, v)?;
            bottleneck = bottleneck.min(res.arc(arc_idx).remaining);
            v = res.arc(arc_idx ^ 1).to;
        }

        let mut v = t;
        while v != s {
            let arc_idx = chain_arc(&parent, v)?;
            res.push(arc_idx, bottleneck);
            v = res.arc(arc_idx ^ 1).to;
        }

        total += bottleneck;
        augmentations += 1;
        debug!(augmentations, pushed = bottleneck, total, "applied augmenting path");
    }

    let flows: Vec<Real> = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(i, e)| res.committed_flow(i, e.capacity, cfg.eps))
        .collect();

    Ok(FlowAssignment {
        total,
        flows,
        augmentations,
    })
}

fn chain_arc(parent: &[Option<usize>], v: usize) -> SolverResult<usize> {
    parent[v].ok_or_else(|| SolverError::Numeric {
        what: format!("BFS parent chain broken at node index {}", v),
    })
}

/// Shortest-path search over arcs with positive residual capacity.
///
/// Fills `parent` with the arc used to reach each visited node. Returns
/// whether the sink was reached.
fn bfs(
    res: &ResidualNetwork,
    s: usize,
    t: usize,
    eps: Real,
    parent: &mut [Option<usize>],
) -> bool {
    parent.iter_mut().for_each(|p| *p = None);
    let mut visited = vec![false; res.node_count()];
    visited[s] = true;

    let mut queue = VecDeque::new();
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        for &arc_idx in res.arcs_from(u) {
            let arc = res.arc(arc_idx);
            if visited[arc.to] || arc.remaining <= eps {
                continue;
            }
            visited[arc.to] = true;
            parent[arc.to] = Some(arc_idx);
            if arc.to == t {
                return true;
            }
            queue.push_back(arc.to);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_graph::NetworkBuilder;

    #[test]
    fn single_chain_is_bounded_by_smallest_capacity() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let w = builder.add_relay("W").unwrap();
        let d = builder.add_destination("D").unwrap();
        let e_aw = builder.connect(a, w, 10.0).unwrap();
        let e_wd = builder.connect(w, d, 6.0).unwrap();
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        assert_eq!(assignment.total(), 6.0);
        assert_eq!(assignment.flow(e_aw), 6.0);
        assert_eq!(assignment.flow(e_wd), 6.0);
        assert_eq!(assignment.augmentations(), 1);
    }

    #[test]
    fn disconnected_network_yields_zero_flow() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let w = builder.add_relay("W").unwrap();
        builder.add_destination("D").unwrap();
        builder.connect(a, w, 10.0).unwrap();
        // No relay -> destination edge: sink unreachable.
        let graph = builder.build().unwrap();

        let assignment = solve(&graph, None).unwrap();
        assert_eq!(assignment.total(), 0.0);
        assert!(assignment.flows().iter().all(|&f| f == 0.0));
        assert_eq!(assignment.augmentations(), 0);
    }

    #[test]
    fn augmentation_cap_is_diagnosable() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let w = builder.add_relay("W").unwrap();
        let d = builder.add_destination("D").unwrap();
        builder.connect(a, w, 10.0).unwrap();
        builder.connect(w, d, 6.0).unwrap();
        let graph = builder.build().unwrap();

        let cfg = SolverConfig {
            max_augmentations: 0,
            ..Default::default()
        };
        let err = solve(&graph, Some(cfg)).unwrap_err();
        assert!(matches!(
            err,
            SolverError::AugmentationCapExceeded { limit: 0, .. }
        ));
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_origin("A").unwrap();
        let b = builder.add_origin("B").unwrap();
        let w1 = builder.add_relay("W1").unwrap();
        let w2 = builder.add_relay("W2").unwrap();
        let d1 = builder.add_destination("D1").unwrap();
        let d2 = builder.add_destination("D2").unwrap();
        builder.connect(a, w1, 7.0).unwrap();
        builder.connect(a, w2, 3.0).unwrap();
        builder.connect(b, w2, 5.0).unwrap();
        builder.connect(w1, d1, 4.0).unwrap();
        builder.connect(w1, d2, 4.0).unwrap();
        builder.connect(w2, d1, 6.0).unwrap();
        let graph = builder.build().unwrap();

        let first = solve(&graph, None).unwrap();
        let second = solve(&graph, None).unwrap();
        assert_eq!(first, second);
    }
}
