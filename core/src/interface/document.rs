use crate::math::matrix::MatrixHelper;
use crate::prelude::{HscoreError, HscoreResult};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Rows of an input matrix, optionally labelled, as exchanged with host code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Bare(Vec<Vec<f64>>),
    Labelled(MatrixDocument),
}

impl MatrixDocument {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { labels: None, rows }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Accepts either a bare `[[..], ..]` array or `{"labels": [..], "rows": [[..], ..]}`.
    pub fn from_json_str(source: &str) -> HscoreResult<Self> {
        let raw: RawDocument = serde_json::from_str(source).map_err(|err| {
            HscoreError::InvalidInput(format!("malformed matrix JSON: {}", err))
        })?;
        Ok(match raw {
            RawDocument::Bare(rows) => Self::new(rows),
            RawDocument::Labelled(doc) => doc,
        })
    }

    /// Dense matrix view of the rows, after the label count and shape are checked.
    pub fn to_matrix(&self) -> HscoreResult<Array2<f64>> {
        if let Some(labels) = &self.labels {
            if labels.len() != self.rows.len() {
                return Err(HscoreError::InvalidInput(format!(
                    "{} labels for {} rows",
                    labels.len(),
                    self.rows.len()
                )));
            }
        }
        MatrixHelper::from_rows(&self.rows)
    }
}
