//! Post-solve invariant verifiers.
//!
//! These re-check a committed `FlowAssignment` against the two contracts the
//! solver guarantees: conservation at every real node and capacity
//! feasibility on every edge. They are pure functions of graph + assignment,
//! used heavily by tests and available to callers that want a belt-and-braces
//! check before reporting.

use lf_core::{nearly_equal, Real, Tolerances};
use lf_graph::{Graph, Tier};

use crate::error::{SolverError, SolverResult};
use crate::solve::FlowAssignment;

/// Verify that inflow equals outflow at every node except the super tiers.
pub fn verify_conservation(
    graph: &Graph,
    assignment: &FlowAssignment,
    tol: Tolerances,
) -> SolverResult<()> {
    for node in graph.nodes() {
        if matches!(node.tier, Tier::SuperSource | Tier::SuperSink) {
            continue;
        }
        let inflow: Real = graph
            .in_edges(node.id)
            .iter()
            .map(|&e| assignment.flow(e))
            .sum();
        let outflow: Real = graph
            .out_edges(node.id)
            .iter()
            .map(|&e| assignment.flow(e))
            .sum();
        if !nearly_equal(inflow, outflow, tol) {
            return Err(SolverError::Numeric {
                what: format!(
                    "Conservation violated at {:?}: inflow {} != outflow {}",
                    node.name, inflow, outflow
                ),
            });
        }
    }
    Ok(())
}

/// Verify `0 <= flow <= capacity` on every edge.
///
/// Synthetic super edges carry the capacity sentinel rather than a real
/// constraint, so they are excluded from the upper-bound check.
pub fn verify_feasibility(
    graph: &Graph,
    assignment: &FlowAssignment,
    tol: Tolerances,
) -> SolverResult<()> {
    for edge in graph.edges() {
        let flow = assignment.flow(edge.id);
        if flow < -tol.abs {
            return Err(SolverError::Numeric {
                what: format!("Negative flow {} on edge {}", flow, edge.id),
            });
        }
        if edge.is_bounded() && flow > edge.capacity + tol.abs {
            return Err(SolverError::Numeric {
                what: format!(
                    "Flow {} exceeds capacity {} on edge {}",
                    flow, edge.capacity, edge.id
                ),
            });
        }
    }
    Ok(())
}
