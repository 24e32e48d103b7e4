//! lf-analysis: post-solve derivations for logiflow.
//!
//! Two read-only layers over a solved graph:
//! - attribution: approximate origin -> destination contribution split
//! - bottleneck: capacity diagnostics and upgrade recommendations
//!
//! Neither layer mutates anything; running them twice on the same solve
//! yields identical results.

pub mod attribution;
pub mod bottleneck;

pub use attribution::{attribute, Attribution};
pub use bottleneck::{analyze, AnalyzerConfig, Bottleneck, BottleneckReport, Recommendation};
