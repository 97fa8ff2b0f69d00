use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// How the lower triangle is scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Rows of the lower triangle are spread over a rayon pool. `None` uses the global pool.
    Parallel { threads: Option<usize> },
}

/// Common error type for kernel execution.
#[derive(thiserror::Error, Debug)]
pub enum HscoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type HscoreResult<T> = Result<T, HscoreError>;

/// A symmetric dissimilarity between two rows of equal length.
///
/// Implementors must return the same value for `(x, y)` and `(y, x)`; the pairwise
/// engine only evaluates the lower triangle and mirrors it.
pub trait PairwiseMetric: Sync {
    fn name(&self) -> &'static str;
    fn distance(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
