//! Contingency table: the count matrix together with its row and column indices.

use ndarray::{Array1, Axis};
use std::hash::Hash;

use super::index::CategoryIndex;
use crate::core::{
    error::{ConfusionLossError, Result},
    types::*,
};

/// G×P co-occurrence matrix of true labels (rows) against predictions (columns).
///
/// Built once per computation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ContingencyTable<L: Hash + Eq, P: Hash + Eq> {
    matrix: ContingencyMatrix,
    labels: CategoryIndex<L>,
    predictions: CategoryIndex<P>,
    total: Count,
}

impl<L: Hash + Eq, P: Hash + Eq> ContingencyTable<L, P> {
    pub(crate) fn from_parts(
        matrix: ContingencyMatrix,
        labels: CategoryIndex<L>,
        predictions: CategoryIndex<P>,
    ) -> Self {
        debug_assert_eq!(matrix.dim(), (labels.len(), predictions.len()));
        let total = matrix.sum();
        Self {
            matrix,
            labels,
            predictions,
            total,
        }
    }

    /// The count matrix.
    pub fn matrix(&self) -> &ContingencyMatrix {
        &self.matrix
    }

    /// Borrowed view of the count matrix, as accepted by the aggregator.
    pub fn view(&self) -> ContingencyView<'_> {
        self.matrix.view()
    }

    /// Consume the table, keeping only the matrix.
    pub fn into_matrix(self) -> ContingencyMatrix {
        self.matrix
    }

    /// Row index: distinct true labels.
    pub fn labels(&self) -> &CategoryIndex<L> {
        &self.labels
    }

    /// Column index: distinct predicted categories.
    pub fn predictions(&self) -> &CategoryIndex<P> {
        &self.predictions
    }

    /// `(G, P)`.
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    /// Number of observations (or total weight for weighted tables).
    pub fn total(&self) -> Count {
        self.total
    }

    /// Row of a label value.
    pub fn row_of(&self, label: &L) -> Option<usize> {
        self.labels.index_of(label)
    }

    /// Column of a prediction value.
    pub fn column_of(&self, prediction: &P) -> Option<usize> {
        self.predictions.index_of(prediction)
    }

    /// Co-occurrence count of a label/prediction pair; 0 if either was never observed.
    pub fn count(&self, label: &L, prediction: &P) -> Count {
        match (self.row_of(label), self.column_of(prediction)) {
            (Some(row), Some(col)) => self.matrix[[row, col]],
            _ => 0.0,
        }
    }

    /// Per-label totals.
    pub fn row_totals(&self) -> Array1<Count> {
        self.matrix.sum_axis(Axis(1))
    }

    /// Per-prediction totals (cluster sizes).
    pub fn column_totals(&self) -> Array1<Count> {
        self.matrix.sum_axis(Axis(0))
    }
}

impl ContingencyTable<usize, usize> {
    /// Wrap a precomputed matrix, using row and column positions as category values.
    ///
    /// Cells must be finite and non-negative. Zero-sized and all-zero columns
    /// are accepted here and rejected (or resolved) by the aggregator.
    pub fn from_matrix(matrix: ContingencyMatrix) -> Result<Self> {
        validate_cells(&matrix.view())?;
        let (rows, cols) = matrix.dim();
        Ok(Self::from_parts(
            matrix,
            CategoryIndex::from_values(0..rows),
            CategoryIndex::from_values(0..cols),
        ))
    }
}

/// Check that every cell is a finite, non-negative count.
pub(crate) fn validate_cells(matrix: &ContingencyView<'_>) -> Result<()> {
    for ((row, col), &value) in matrix.indexed_iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfusionLossError::invalid_input(format!(
                "cell ({}, {}) = {} must be finite and non-negative",
                row, col, value
            )));
        }
    }
    Ok(())
}
