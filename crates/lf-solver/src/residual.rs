//! Residual-capacity view of a graph.
//!
//! The logical `Graph` is immutable during a solve; all mutable state lives
//! here. Each graph edge becomes a pair of arcs: forward arc `2e` with
//! remaining capacity `capacity - flow`, reverse arc `2e + 1` with remaining
//! capacity `flow`. Pushing along one arc of a pair withdraws from it and
//! credits its partner (`i ^ 1`).

use lf_core::Real;
use lf_graph::Graph;

#[derive(Debug, Clone)]
pub(crate) struct Arc {
    /// Target node index of this arc.
    pub to: usize,
    /// Usable capacity left on this arc.
    pub remaining: Real,
}

#[derive(Debug)]
pub(crate) struct ResidualNetwork {
    arcs: Vec<Arc>,
    /// Per-node arc indices, in arc creation order (= edge insertion order).
    heads: Vec<Vec<usize>>,
}

impl ResidualNetwork {
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.nodes().len();
        let mut arcs = Vec::with_capacity(graph.edges().len() * 2);
        let mut heads: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for edge in graph.edges() {
            let from = edge.from.index() as usize;
            let to = edge.to.index() as usize;

            heads[from].push(arcs.len());
            arcs.push(Arc {
                to,
                remaining: edge.capacity,
            });

            heads[to].push(arcs.len());
            arcs.push(Arc { to: from, remaining: 0.0 });
        }

        Self { arcs, heads }
    }

    pub fn node_count(&self) -> usize {
        self.heads.len()
    }

    pub fn arcs_from(&self, node: usize) -> &[usize] {
        &self.heads[node]
    }

    pub fn arc(&self, idx: usize) -> &Arc {
        &self.arcs[idx]
    }

    /// Push `amount` along arc `idx`, crediting the paired reverse arc.
    pub fn push(&mut self, idx: usize, amount: Real) {
        self.arcs[idx].remaining -= amount;
        self.arcs[idx ^ 1].remaining += amount;
    }

    /// Committed flow on graph edge `e` (0-based edge index).
    ///
    /// The reverse arc's remaining capacity is exactly the flow pushed
    /// through the edge. Values within `eps` of the capacity are snapped to
    /// it, and values within `eps` of zero are snapped to zero, so the
    /// analyzer's exact-equality saturation test is reliable.
    pub fn committed_flow(&self, edge_index: usize, capacity: Real, eps: Real) -> Real {
        let flow = self.arcs[2 * edge_index + 1].remaining;
        if (capacity - flow).abs() <= eps {
            capacity
        } else if flow.abs() <= eps {
            0.0
        } else {
            flow
        }
    }
}
