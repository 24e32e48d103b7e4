//! lf-core: stable foundation for logiflow.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LfError, LfResult};
pub use ids::*;
pub use numeric::*;
