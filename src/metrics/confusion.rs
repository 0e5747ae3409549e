//! Confusion loss: entropy-based purity score of predicted categories.
//!
//! Each predicted category (matrix column) is scored by the base-2 entropy
//! of its true-label distribution, normalized by `log2(G)`. The per-column
//! scores are combined with a power mean of exponent `alpha`, so larger
//! exponents weigh the most mixed columns more heavily.

use ndarray::Axis;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

use super::entropy::{normalized_entropy, power_mean, shannon_entropy};
use super::MetricCalculator;
use crate::config::{validate_alpha, ConfusionLossConfig};
use crate::contingency::{
    build_contingency, build_contingency_ordered, validate_cells, ContingencyTable,
};
use crate::core::{
    error::{ConfusionLossError, Result},
    types::*,
};
use crate::report::ConfusionLossReport;

/// Detailed outcome of a confusion loss evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionLossResult {
    /// Aggregated loss
    pub loss: f64,
    /// Exponent used for aggregation
    pub alpha: f64,
    /// Number of distinct true labels (G)
    pub num_labels: usize,
    /// Number of distinct predictions (P)
    pub num_predictions: usize,
    /// Entropy of a uniform distribution over G labels, `log2(G)`
    pub max_entropy: f64,
    /// Raw entropy in bits per column; `None` for zero-sum columns
    pub column_entropies: Vec<Option<f64>>,
    /// Normalized entropy entering the power mean; `None` for skipped columns
    pub normalized_entropies: Vec<Option<f64>>,
    /// Columns that summed to zero and were resolved by the zero-column policy
    pub zero_columns: Vec<usize>,
}

impl ConfusionLossResult {
    /// Number of columns that contributed to the mean.
    pub fn contributing_columns(&self) -> usize {
        self.normalized_entropies.iter().flatten().count()
    }
}

/// Compute the confusion loss of a G×P contingency matrix.
///
/// Rows are true labels, columns are predicted categories. A result of 0
/// means every predicted category holds a single true label; 1 means every
/// predicted category is spread uniformly over all labels.
///
/// # Errors
///
/// - [`ConfusionLossError::InvalidShape`] if either dimension is zero
/// - [`ConfusionLossError::InvalidParameter`] if `alpha` is NaN or not positive
/// - [`ConfusionLossError::InvalidInput`] if a cell is negative or non-finite
/// - [`ConfusionLossError::DegenerateColumn`] if a column sums to zero
///
/// ```rust
/// use confusion_loss::confusion_loss;
/// use ndarray::array;
///
/// let pure = array![[4.0, 0.0], [0.0, 3.0]];
/// assert_eq!(confusion_loss(pure.view(), 2.0)?, 0.0);
///
/// let mixed = array![[2.0], [2.0]];
/// assert_eq!(confusion_loss(mixed.view(), 2.0)?, 1.0);
/// # Ok::<(), confusion_loss::ConfusionLossError>(())
/// ```
pub fn confusion_loss(matrix: ContingencyView<'_>, alpha: f64) -> Result<f64> {
    evaluate(matrix, alpha, ZeroColumnPolicy::Error).map(|result| result.loss)
}

/// Compute the confusion loss with full configuration, returning the per-column breakdown.
pub fn confusion_loss_with_config(
    matrix: ContingencyView<'_>,
    config: &ConfusionLossConfig,
) -> Result<ConfusionLossResult> {
    evaluate(matrix, config.alpha, config.zero_column_policy)
}

/// Build the contingency table of `labels` against `predictions` and score it.
///
/// Returns the loss together with the table, whose matrix and index maps
/// label the rows and columns for display.
///
/// ```rust
/// use confusion_loss::confusion_loss_from_labels;
///
/// let labels = ["a", "a", "b", "b"];
/// let predictions = ["x", "x", "y", "y"];
/// let (loss, table) = confusion_loss_from_labels(&labels, &predictions, 2.0)?;
/// assert_eq!(loss, 0.0);
/// assert_eq!(table.shape(), (2, 2));
/// # Ok::<(), confusion_loss::ConfusionLossError>(())
/// ```
pub fn confusion_loss_from_labels<L, P>(
    labels: &[L],
    predictions: &[P],
    alpha: f64,
) -> Result<(f64, ContingencyTable<L, P>)>
where
    L: Hash + Eq + Clone,
    P: Hash + Eq + Clone,
{
    let table = build_contingency(labels, predictions)?;
    let loss = confusion_loss(table.view(), alpha)?;
    Ok((loss, table))
}

fn evaluate(
    matrix: ContingencyView<'_>,
    alpha: f64,
    policy: ZeroColumnPolicy,
) -> Result<ConfusionLossResult> {
    let (rows, cols) = matrix.dim();
    if rows < 1 || cols < 1 {
        return Err(ConfusionLossError::invalid_shape(rows, cols));
    }
    validate_alpha(alpha)?;
    validate_cells(&matrix)?;

    let max_entropy = (rows as f64).log2();
    let mut column_entropies = Vec::with_capacity(cols);
    let mut normalized_entropies = Vec::with_capacity(cols);
    let mut zero_columns = Vec::new();

    for (col, column) in matrix.axis_iter(Axis(1)).enumerate() {
        let entropy = shannon_entropy(column);
        let normalized = match normalized_entropy(column, rows) {
            Some(h) => Some(h),
            None => {
                zero_columns.push(col);
                match policy {
                    ZeroColumnPolicy::Error => {
                        return Err(ConfusionLossError::degenerate_column(col))
                    }
                    ZeroColumnPolicy::Pure => Some(0.0),
                    ZeroColumnPolicy::Uniform => Some(1.0),
                    ZeroColumnPolicy::Skip => None,
                }
            }
        };
        if let Some(h) = normalized.filter(|h| !h.is_finite()) {
            return Err(ConfusionLossError::invalid_input(format!(
                "column {} has non-finite normalized entropy {}",
                col, h
            )));
        }
        log::trace!("column {}: entropy {:?} bits, normalized {:?}", col, entropy, normalized);
        column_entropies.push(entropy);
        normalized_entropies.push(normalized);
    }

    if !zero_columns.is_empty() {
        log::warn!(
            "{} zero-sum column(s) {:?} resolved with policy '{}'",
            zero_columns.len(),
            zero_columns,
            policy
        );
    }

    let contributing: Vec<f64> = normalized_entropies.iter().flatten().copied().collect();
    let loss = power_mean(&contributing, alpha)
        .ok_or_else(|| ConfusionLossError::invalid_shape(rows, contributing.len()))?;

    log::debug!("confusion loss of {}x{} matrix (alpha = {}): {}", rows, cols, alpha, loss);

    Ok(ConfusionLossResult {
        loss,
        alpha,
        num_labels: rows,
        num_predictions: cols,
        max_entropy,
        column_entropies,
        normalized_entropies,
        zero_columns,
    })
}

/// Confusion loss calculator bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct ConfusionLoss {
    config: ConfusionLossConfig,
}

impl ConfusionLoss {
    /// Create a calculator, validating the configuration.
    pub fn new(config: ConfusionLossConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Calculator with the default configuration and the given exponent.
    pub fn with_alpha(alpha: f64) -> Result<Self> {
        Self::new(ConfusionLossConfig::with_alpha(alpha))
    }

    /// The configuration in use.
    pub fn config(&self) -> &ConfusionLossConfig {
        &self.config
    }

    /// Score a precomputed contingency matrix.
    pub fn calculate(&self, matrix: ContingencyView<'_>) -> Result<ConfusionLossResult> {
        confusion_loss_with_config(matrix, &self.config)
    }

    /// Score an already built contingency table.
    pub fn calculate_table<L, P>(
        &self,
        table: &ContingencyTable<L, P>,
    ) -> Result<ConfusionLossResult>
    where
        L: Hash + Eq,
        P: Hash + Eq,
    {
        self.calculate(table.view())
    }

    /// Build a table from labels and predictions using the configured ordering, then score it.
    pub fn calculate_from_labels<L, P>(
        &self,
        labels: &[L],
        predictions: &[P],
    ) -> Result<(ConfusionLossResult, ContingencyTable<L, P>)>
    where
        L: Hash + Eq + Clone + Ord,
        P: Hash + Eq + Clone + Ord,
    {
        let table = build_contingency_ordered(labels, predictions, self.config.category_order)?;
        let result = self.calculate_table(&table)?;
        Ok((result, table))
    }

    /// Build, score and package the outcome for a rendering consumer.
    pub fn report<L, P>(&self, labels: &[L], predictions: &[P]) -> Result<ConfusionLossReport>
    where
        L: Hash + Eq + Clone + Ord + Display,
        P: Hash + Eq + Clone + Ord + Display,
    {
        let (result, table) = self.calculate_from_labels(labels, predictions)?;
        Ok(ConfusionLossReport::new(&table, &result))
    }
}

impl Default for ConfusionLoss {
    fn default() -> Self {
        Self {
            config: ConfusionLossConfig::default(),
        }
    }
}

impl MetricCalculator for ConfusionLoss {
    type Output = ConfusionLossResult;

    fn evaluate(&self, matrix: ContingencyView<'_>) -> Result<Self::Output> {
        self.calculate(matrix)
    }

    fn name(&self) -> &'static str {
        "confusion_loss"
    }
}
