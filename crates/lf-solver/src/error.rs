//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur during network solving.
///
/// A disconnected source/sink is deliberately *not* here: zero flow is a
/// valid, terminal result, not a failure.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    /// The augmenting-path loop exceeded its iteration cap. This guards
    /// against pathological real-valued capacities that could in principle
    /// prevent finite termination; a suboptimal flow is never returned
    /// silently.
    #[error("Augmentation cap of {limit} exceeded after pushing {pushed}")]
    AugmentationCapExceeded { limit: usize, pushed: f64 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] lf_graph::GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;
