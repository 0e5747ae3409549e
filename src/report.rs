//! Serializable hand-off for consumers that render a confusion matrix.
//!
//! A renderer needs the score for its title, the raw counts for the cells
//! and the original label/prediction values for the axis ticks. The report
//! bundles exactly that and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

use crate::contingency::ContingencyTable;
use crate::core::error::Result;
use crate::metrics::ConfusionLossResult;

/// Score, matrix and axis labels of one confusion loss evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionLossReport {
    /// Aggregated loss
    pub loss: f64,
    /// Exponent used for aggregation; written as `"inf"` when infinite
    #[serde(with = "exponent")]
    pub alpha: f64,
    /// Row tick labels (true labels), in matrix order
    pub row_labels: Vec<String>,
    /// Column tick labels (predictions), in matrix order
    pub column_labels: Vec<String>,
    /// Row-major cell values
    pub matrix: Vec<Vec<f64>>,
    /// Per-column normalized entropy; `None` for skipped columns
    pub column_scores: Vec<Option<f64>>,
}

impl ConfusionLossReport {
    /// Assemble a report from a table and the result computed on it.
    pub fn new<L, P>(table: &ContingencyTable<L, P>, result: &ConfusionLossResult) -> Self
    where
        L: Hash + Eq + Display,
        P: Hash + Eq + Display,
    {
        Self {
            loss: result.loss,
            alpha: result.alpha,
            row_labels: table.labels().iter().map(ToString::to_string).collect(),
            column_labels: table.predictions().iter().map(ToString::to_string).collect(),
            matrix: table.matrix().rows().into_iter().map(|row| row.to_vec()).collect(),
            column_scores: result.normalized_entropies.clone(),
        }
    }

    /// Title line for the rendered figure.
    pub fn title(&self) -> String {
        format!("Confusion loss (alpha = {}): {:.4}", self.alpha, self.loss)
    }

    /// `(rows, columns)` of the matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.column_labels.len())
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON encoding.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// JSON has no infinity, so an infinite exponent is stored as the string `"inf"`.
mod exponent {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(alpha: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if alpha.is_infinite() {
            serializer.serialize_str(if *alpha > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*alpha)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Encoded::deserialize(deserializer)? {
            Encoded::Number(alpha) => Ok(alpha),
            Encoded::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid exponent '{}'", text))),
        }
    }
}
