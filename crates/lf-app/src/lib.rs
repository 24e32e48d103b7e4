//! lf-app: application/service layer for logiflow.
//!
//! Ties the backend crates together for front ends (CLI, future UIs):
//! topology loading, the end-to-end analysis pipeline, report assembly, and
//! the bundled sample network.
//!
//! ```
//! use lf_analysis::AnalyzerConfig;
//! use lf_app::{run_analysis, sample_topology};
//!
//! let report = run_analysis(&sample_topology(), None, &AnalyzerConfig::default()).unwrap();
//! assert_eq!(report.total_flow, 115.0);
//! ```

pub mod error;
pub mod report;
pub mod sample;
pub mod service;

pub use error::{AppError, AppResult};
pub use report::{render_text, AnalysisReport};
pub use sample::sample_topology;
pub use service::{load_topology, run_analysis};
