//! # Analysis Module
//!
//! The cost-of-attack batch job. A trial dump produced by the forked pool
//! simulation is loaded, two metrics are derived per swap, and the result is
//! laid out as a four panel dashboard:
//!
//! load → derive → plot → write → truncate the dump

/// Reading trial dumps
pub mod loader;
/// Derived metrics
pub mod metrics;
/// End to end `analyze` run
pub mod pipeline;
/// Dashboard layout of an analysis
pub mod report;
/// Test helpers and utilities
mod test_helpers;
/// Trial and balance types
pub mod types;

pub use metrics::Analysis;
pub use pipeline::{run, AnalyzeOptions};
pub use types::{PoolBalances, RateOrientation, SwapTrial, TrialDump};
