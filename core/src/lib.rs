//! Pairwise H-score matrix for quantitative-genetics interaction analysis.
//!
//! For every pair of rows in a numeric matrix the kernel measures how far their joint
//! profile departs from an additive model. Only the strictly lower triangle is evaluated;
//! each value is mirrored so the result is symmetric by construction.

pub mod interface;
pub mod math;
pub mod pairwise;
pub mod prelude;
pub mod telemetry;

pub use pairwise::{hscore, hscore_parallel, hscore_rows, HScore, PairwiseEngine};
pub use prelude::{ExecutionMode, HscoreError, HscoreResult, PairwiseMetric};
