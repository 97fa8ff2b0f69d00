use crate::math::matrix::MatrixHelper;
use crate::math::stats::StatsHelper;
use crate::pairwise::engine::PairwiseEngine;
use crate::prelude::{ExecutionMode, HscoreResult, PairwiseMetric};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// H-score between two rows `x` and `y` of length `p`:
///
/// ```text
/// d(x, y) = (1/p) * Σ_k [ x_k - mean(x) - (x_k + y_k)/2 + sum(x + y)/(2p) ]^2
/// ```
///
/// The residual reduces to `((x_k - y_k) - (mean(x) - mean(y))) / 2`, so swapping the
/// rows only flips its sign and the score is symmetric. Rows that differ by a constant
/// shift score zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HScore;

impl PairwiseMetric for HScore {
    fn name(&self) -> &'static str {
        "hscore"
    }

    fn distance(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        let p = x.len() as f64;
        let mean_x = StatsHelper::mean(x);
        let joint: f64 = x.iter().zip(y.iter()).map(|(a, b)| a + b).sum();
        let shift = joint / (2.0 * p);

        let sum_sq: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&a, &b)| {
                let r = a - mean_x - (a + b) / 2.0 + shift;
                r * r
            })
            .sum();
        sum_sq / p
    }
}

/// Sequential H-score matrix over the rows of `mat`.
pub fn hscore(mat: ArrayView2<f64>) -> HscoreResult<Array2<f64>> {
    PairwiseEngine::new(HScore).compute(mat)
}

/// Same as [`hscore`] for row vectors; ragged input is rejected.
pub fn hscore_rows(rows: &[Vec<f64>]) -> HscoreResult<Array2<f64>> {
    let mat = MatrixHelper::from_rows(rows)?;
    hscore(mat.view())
}

/// H-score matrix computed on a rayon pool. `threads = None` uses the global pool.
pub fn hscore_parallel(
    mat: ArrayView2<f64>,
    threads: Option<usize>,
) -> HscoreResult<Array2<f64>> {
    PairwiseEngine::new(HScore)
        .with_mode(ExecutionMode::Parallel { threads })
        .compute(mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::HscoreError;
    use ndarray::array;

    const EPS: f64 = 1e-9;

    #[test]
    fn shifted_rows_score_zero() {
        let res = hscore(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].view()).unwrap();
        assert_eq!(res.dim(), (2, 2));
        assert!(res[[1, 0]].abs() < EPS);
        assert_eq!(res[[0, 1]], res[[1, 0]]);
        assert_eq!(res[[0, 0]], 0.0);
        assert_eq!(res[[1, 1]], 0.0);
    }

    #[test]
    fn reversed_rows_score_two_thirds() {
        let res = hscore(array![[1.0, 2.0, 3.0], [3.0, 2.0, 1.0]].view()).unwrap();
        assert!((res[[1, 0]] - 2.0 / 3.0).abs() < EPS);
        assert_eq!(res[[0, 1]], res[[1, 0]]);
    }

    #[test]
    fn single_spike_against_flat_row() {
        // residuals are [-0.5, -0.5, -0.5, 1.5]
        let d = HScore.distance(
            array![0.0, 0.0, 0.0, 4.0].view(),
            array![0.0, 0.0, 0.0, 0.0].view(),
        );
        assert!((d - 0.75).abs() < EPS);
    }

    #[test]
    fn single_row_gives_zero_matrix() {
        let res = hscore(array![[3.5, -1.0, 8.0]].view()).unwrap();
        assert_eq!(res, array![[0.0]]);
    }

    #[test]
    fn single_column_always_scores_zero() {
        let res = hscore(array![[1.0], [10.0], [-4.0]].view()).unwrap();
        assert!(res.iter().all(|d| d.abs() < EPS));
    }

    #[test]
    fn identical_rows_score_near_zero() {
        let row = vec![0.1, 0.7, 1e3, -2.25, 13.0];
        let res = hscore_rows(&[row.clone(), row]).unwrap();
        assert!(res[[1, 0]].abs() < EPS);
    }

    #[test]
    fn rows_without_columns_are_rejected() {
        let err = hscore_rows(&[vec![], vec![]]).unwrap_err();
        assert!(matches!(err, HscoreError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_input_propagates() {
        let res = hscore(array![[1.0, f64::NAN], [2.0, 3.0], [0.0, 1.0]].view()).unwrap();
        assert!(res[[1, 0]].is_nan());
        assert!(res[[2, 0]].is_nan());
        assert!(res[[2, 1]].is_finite());
    }

    #[test]
    fn parallel_matches_sequential_exactly() {
        let mat = array![
            [0.2, 1.5, -3.0, 4.0],
            [1.0, 1.0, 1.0, 1.0],
            [9.0, -2.0, 0.5, 0.25],
            [3.0, 3.5, 2.0, -7.0],
            [0.0, 0.0, 1.0, 0.0]
        ];
        let sequential = hscore(mat.view()).unwrap();
        assert_eq!(hscore_parallel(mat.view(), None).unwrap(), sequential);
        assert_eq!(hscore_parallel(mat.view(), Some(3)).unwrap(), sequential);
    }
}
