use crate::math::matrix::MatrixHelper;
use crate::prelude::{ExecutionMode, HscoreError, HscoreResult, PairwiseMetric};
use crate::telemetry::log::LogManager;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

/// Evaluates a symmetric metric over every pair of rows, lower triangle only.
pub struct PairwiseEngine<M: PairwiseMetric> {
    metric: M,
    mode: ExecutionMode,
    logger: LogManager,
}

impl<M: PairwiseMetric> PairwiseEngine<M> {
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            mode: ExecutionMode::Sequential,
            logger: LogManager::new(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Returns the `n x n` matrix of pairwise distances. The diagonal stays zero.
    ///
    /// Shape is validated before the output is allocated.
    pub fn compute(&self, mat: ArrayView2<f64>) -> HscoreResult<Array2<f64>> {
        let (n, p) = MatrixHelper::check_shape(mat).map_err(|err| {
            self.logger.reject(&err);
            err
        })?;
        self.logger.record(&format!(
            "{} over {} rows x {} columns ({:?})",
            self.metric.name(),
            n,
            p,
            self.mode
        ));

        let mut res = Array2::<f64>::zeros((n, n));
        match self.mode {
            ExecutionMode::Sequential => {
                for i in 0..n {
                    let x = mat.row(i);
                    for j in 0..i {
                        let d = self.metric.distance(x, mat.row(j));
                        res[[j, i]] = d;
                        res[[i, j]] = d;
                    }
                }
            }
            ExecutionMode::Parallel { threads } => {
                let lower = self.lower_rows_parallel(mat, threads)?;
                for (i, row) in lower.into_iter().enumerate() {
                    for (j, d) in row.into_iter().enumerate() {
                        res[[i, j]] = d;
                    }
                }
                MatrixHelper::mirror_lower(&mut res);
            }
        }

        Ok(res)
    }

    fn lower_rows_parallel(
        &self,
        mat: ArrayView2<f64>,
        threads: Option<usize>,
    ) -> HscoreResult<Vec<Vec<f64>>> {
        match threads {
            Some(count) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|err| {
                        HscoreError::Internal(format!("building worker pool: {}", err))
                    })?;
                Ok(pool.install(|| self.lower_rows(mat)))
            }
            None => Ok(self.lower_rows(mat)),
        }
    }

    // Worker i owns cells (i, 0..i) only.
    fn lower_rows(&self, mat: ArrayView2<f64>) -> Vec<Vec<f64>> {
        (0..mat.nrows())
            .into_par_iter()
            .map(|i| {
                let x = mat.row(i);
                (0..i)
                    .map(|j| self.metric.distance(x, mat.row(j)))
                    .collect::<Vec<f64>>()
            })
            .collect()
    }
}
