//! # orbis-bench
//!
//! Timing harness for mesh generation and frame-transform computation.
//!
//! Measures wall-clock generation time per subdivision level and the
//! average cost of the per-tick transform pipeline, reporting results
//! as CSV for regression tracking.

pub mod metrics;
pub mod runner;

pub use metrics::GenerationMetrics;
pub use runner::BenchRunner;
