//! Graph validation logic.

use std::collections::HashSet;

use lf_core::{EdgeId, NodeId};

use crate::error::GraphError;
use crate::graph::{Edge, Node};

/// Validate the graph structure: all references exist, capacities are sane,
/// edges are unique per ordered pair.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[Edge]) -> Result<(), GraphError> {
    // Edge IDs must be contiguous and match their indices.
    for (i, edge) in edges.iter().enumerate() {
        if edge.id.index() as usize != i {
            return Err(GraphError::InconsistentAdjacency {
                edge: edge.id,
                node: edge.from,
            });
        }
    }

    let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
    for edge in edges {
        if edge.from.index() as usize >= nodes.len() {
            return Err(GraphError::NodeOutOfRange { node: edge.from });
        }
        if edge.to.index() as usize >= nodes.len() {
            return Err(GraphError::NodeOutOfRange { node: edge.to });
        }
        if edge.from == edge.to {
            return Err(GraphError::SelfLoop { node: edge.from });
        }
        if !edge.capacity.is_finite() {
            return Err(GraphError::NonFiniteCapacity {
                from: edge.from,
                to: edge.to,
            });
        }
        if edge.capacity < 0.0 {
            return Err(GraphError::NegativeCapacity {
                from: edge.from,
                to: edge.to,
                capacity: edge.capacity,
            });
        }
        if !pairs.insert((edge.from, edge.to)) {
            return Err(GraphError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            });
        }
    }

    Ok(())
}

/// Validate one adjacency direction for consistency.
///
/// `forward` selects which endpoint each listed edge must reference:
/// true for the outgoing lists (edge.from), false for incoming (edge.to).
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    edges: &[Edge],
    offsets: &[usize],
    lists: &[EdgeId],
    forward: bool,
) -> Result<(), GraphError> {
    if offsets.len() != nodes.len() + 1 {
        return Err(GraphError::InconsistentAdjacency {
            edge: EdgeId::from_index(0),
            node: nodes.first().map_or(NodeId::from_index(0), |n| n.id),
        });
    }

    for node in nodes {
        let idx = node.id.index() as usize;
        for &edge_id in &lists[offsets[idx]..offsets[idx + 1]] {
            let edge = edges
                .get(edge_id.index() as usize)
                .ok_or(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                })?;
            let endpoint = if forward { edge.from } else { edge.to };
            if endpoint != node.id {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                });
            }
        }
    }

    // Every edge must appear in exactly one node's list.
    let mut seen: HashSet<EdgeId> = HashSet::new();
    for &edge_id in lists {
        if !seen.insert(edge_id) {
            let edge = &edges[edge_id.index() as usize];
            return Err(GraphError::InconsistentAdjacency {
                edge: edge_id,
                node: if forward { edge.from } else { edge.to },
            });
        }
    }
    for edge in edges {
        if !seen.contains(&edge.id) {
            return Err(GraphError::InconsistentAdjacency {
                edge: edge.id,
                node: if forward { edge.from } else { edge.to },
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Tier;
    use lf_core::Id;

    fn node(i: u32, tier: Tier) -> Node {
        Node {
            id: Id::from_index(i),
            name: format!("N{}", i),
            tier,
        }
    }

    fn edge(i: u32, from: u32, to: u32, capacity: f64) -> Edge {
        Edge {
            id: Id::from_index(i),
            from: Id::from_index(from),
            to: Id::from_index(to),
            capacity,
            unbounded: false,
        }
    }

    #[test]
    fn validate_empty_graph() {
        assert!(validate_structure(&[], &[]).is_ok());
    }

    #[test]
    fn validate_dangling_endpoint() {
        let nodes = vec![node(0, Tier::Origin)];
        let edges = vec![edge(0, 0, 99, 1.0)];
        let err = validate_structure(&nodes, &edges).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange { .. }));
    }

    #[test]
    fn validate_negative_capacity() {
        let nodes = vec![node(0, Tier::Origin), node(1, Tier::Relay)];
        let edges = vec![edge(0, 0, 1, -1.0)];
        let err = validate_structure(&nodes, &edges).unwrap_err();
        assert!(matches!(err, GraphError::NegativeCapacity { .. }));
    }

    #[test]
    fn validate_duplicate_pair() {
        let nodes = vec![node(0, Tier::Origin), node(1, Tier::Relay)];
        let edges = vec![edge(0, 0, 1, 1.0), edge(1, 0, 1, 2.0)];
        let err = validate_structure(&nodes, &edges).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
    }

    #[test]
    fn validate_self_loop() {
        let nodes = vec![node(0, Tier::Relay)];
        let edges = vec![edge(0, 0, 0, 1.0)];
        let err = validate_structure(&nodes, &edges).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop { .. }));
    }
}
