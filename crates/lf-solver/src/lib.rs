//! lf-solver: maximum-flow solver for logiflow.
//!
//! Implements the shortest-augmenting-path (Edmonds–Karp) algorithm over an
//! explicit residual-arc arena. The solver never mutates the input graph;
//! solved per-edge flows are committed once into a [`FlowAssignment`].
//!
//! Determinism: arcs are explored in edge insertion order, so two solves of
//! the same topology produce bit-identical assignments.

pub mod checks;
pub mod error;
pub(crate) mod residual;
pub mod solve;

pub use checks::{verify_conservation, verify_feasibility};
pub use error::{SolverError, SolverResult};
pub use solve::{solve, FlowAssignment, SolverConfig};
