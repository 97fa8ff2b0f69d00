use crate::workflow::config::RunConfig;
use anyhow::Context;
use hscore::interface::{HscoreReport, MatrixDocument};
use hscore::{HScore, PairwiseEngine};
use log::info;

#[derive(Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, document: &MatrixDocument) -> anyhow::Result<HscoreReport> {
        let mode = self.config.to_execution_mode();
        let matrix = document.to_matrix().context("validating input matrix")?;
        info!(
            "computing H-scores for {} rows x {} columns ({:?})",
            matrix.nrows(),
            matrix.ncols(),
            mode
        );

        let scores = PairwiseEngine::new(HScore)
            .with_mode(mode)
            .compute(matrix.view())
            .context("computing H-score matrix")?;

        Ok(HscoreReport::new(
            document.labels.clone(),
            matrix.ncols(),
            mode,
            &scores,
        ))
    }

    pub fn render(&self, report: &HscoreReport) -> anyhow::Result<String> {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.context("serializing H-score report")
    }
}
