use crate::prelude::ExecutionMode;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Serializable result of one H-score run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HscoreReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub rows: usize,
    pub columns: usize,
    pub mode: ExecutionMode,
    /// Non-finite scores serialize as `null` in JSON.
    pub scores: Vec<Vec<f64>>,
}

impl HscoreReport {
    pub fn new(
        labels: Option<Vec<String>>,
        columns: usize,
        mode: ExecutionMode,
        scores: &Array2<f64>,
    ) -> Self {
        Self {
            labels,
            rows: scores.nrows(),
            columns,
            mode,
            scores: scores.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn report_serializes_nested_rows() {
        let scores = array![[0.0, 0.5], [0.5, 0.0]];
        let report = HscoreReport::new(None, 3, ExecutionMode::Sequential, &scores);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], 2);
        assert_eq!(json["columns"], 3);
        assert_eq!(json["mode"], "sequential");
        assert_eq!(json["scores"][0][1], 0.5);
        assert!(json.get("labels").is_none());
    }
}
