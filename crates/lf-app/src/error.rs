//! Error types for the lf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for front ends.
///
/// Configuration errors abort a run before any computation; everything the
/// pipeline handles locally (zero-flow networks, zero-outflow relays) never
/// reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read topology file: {path}")]
    TopologyFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON topology: {0}")]
    TopologyJson(#[from] serde_json::Error),

    #[error("Failed to parse YAML topology: {0}")]
    TopologyYaml(#[from] serde_yaml::Error),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<lf_graph::GraphError> for AppError {
    fn from(err: lf_graph::GraphError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<lf_solver::SolverError> for AppError {
    fn from(err: lf_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}
