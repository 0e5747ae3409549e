//! Contingency table construction from paired label/prediction sequences.

use num_traits::ToPrimitive;
use std::hash::Hash;

use super::index::CategoryIndex;
use super::table::ContingencyTable;
use crate::core::{
    error::{ConfusionLossError, Result},
    types::*,
};

/// Build a contingency table with rows and columns in first-occurrence order.
///
/// Pairing is positional: `labels[i]` co-occurs with `predictions[i]`.
///
/// # Errors
///
/// - [`ConfusionLossError::InvalidInput`] if the sequences differ in length
/// - [`ConfusionLossError::EmptyInput`] if they are empty
///
/// ```rust
/// use confusion_loss::build_contingency;
///
/// let table = build_contingency(&["a", "a", "b"], &[1, 2, 2])?;
/// assert_eq!(table.shape(), (2, 2));
/// assert_eq!(table.count(&"b", &2), 1.0);
/// # Ok::<(), confusion_loss::ConfusionLossError>(())
/// ```
pub fn build_contingency<L, P>(labels: &[L], predictions: &[P]) -> Result<ContingencyTable<L, P>>
where
    L: Hash + Eq + Clone,
    P: Hash + Eq + Clone,
{
    validate_pairs(labels, predictions)?;
    let cells = index_pairs(labels, predictions, None);
    Ok(cells.into_table(None, None))
}

/// Build a contingency table with rows and columns sorted by value.
pub fn build_contingency_sorted<L, P>(
    labels: &[L],
    predictions: &[P],
) -> Result<ContingencyTable<L, P>>
where
    L: Hash + Eq + Clone + Ord,
    P: Hash + Eq + Clone + Ord,
{
    build_contingency_ordered(labels, predictions, CategoryOrder::Sorted)
}

/// Build a contingency table using the given [`CategoryOrder`].
pub fn build_contingency_ordered<L, P>(
    labels: &[L],
    predictions: &[P],
    order: CategoryOrder,
) -> Result<ContingencyTable<L, P>>
where
    L: Hash + Eq + Clone + Ord,
    P: Hash + Eq + Clone + Ord,
{
    validate_pairs(labels, predictions)?;
    let cells = index_pairs(labels, predictions, None);
    Ok(match order {
        CategoryOrder::FirstSeen => cells.into_table(None, None),
        CategoryOrder::Sorted => cells.into_sorted_table(),
    })
}

/// Build a contingency table where each pair contributes its weight instead of 1.
///
/// Weights must be finite and non-negative, and so must every cell sum and
/// the grand total. A prediction whose weights are all zero still gets a
/// column; that column sums to zero and is handled by the aggregator's
/// [`ZeroColumnPolicy`].
pub fn build_contingency_weighted<L, P, W>(
    labels: &[L],
    predictions: &[P],
    weights: &[W],
) -> Result<ContingencyTable<L, P>>
where
    L: Hash + Eq + Clone,
    P: Hash + Eq + Clone,
    W: ToPrimitive,
{
    validate_pairs(labels, predictions)?;
    if weights.len() != labels.len() {
        return Err(ConfusionLossError::invalid_input(format!(
            "weights: {}, labels: {}",
            weights.len(),
            labels.len()
        )));
    }

    let weights = weights
        .iter()
        .enumerate()
        .map(|(i, w)| match w.to_f64() {
            Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(ConfusionLossError::invalid_input(format!(
                "weight at position {} must be finite and non-negative",
                i
            ))),
        })
        .collect::<Result<Vec<Count>>>()?;

    let table = index_pairs(labels, predictions, Some(&weights)).into_table(None, None);
    if let Some(((row, col), _)) = table.matrix().indexed_iter().find(|(_, w)| !w.is_finite()) {
        return Err(ConfusionLossError::invalid_input(format!(
            "summed weights of cell ({}, {}) overflow f64",
            row, col
        )));
    }
    crate::ensure!(
        table.total().is_finite(),
        ConfusionLossError::invalid_input("total weight overflows f64")
    );
    Ok(table)
}

fn validate_pairs<L, P>(labels: &[L], predictions: &[P]) -> Result<()> {
    if labels.len() != predictions.len() {
        return Err(ConfusionLossError::invalid_input(format!(
            "labels: {}, predictions: {}",
            labels.len(),
            predictions.len()
        )));
    }
    crate::ensure!(!labels.is_empty(), ConfusionLossError::EmptyInput);
    Ok(())
}

/// Observations translated to first-seen indices, before the matrix is allocated.
struct IndexedPairs<L: Hash + Eq, P: Hash + Eq> {
    labels: CategoryIndex<L>,
    predictions: CategoryIndex<P>,
    cells: Vec<(usize, usize, Count)>,
}

fn index_pairs<L, P>(
    labels: &[L],
    predictions: &[P],
    weights: Option<&[Count]>,
) -> IndexedPairs<L, P>
where
    L: Hash + Eq + Clone,
    P: Hash + Eq + Clone,
{
    let mut label_index = CategoryIndex::new();
    let mut prediction_index = CategoryIndex::new();
    let cells = labels
        .iter()
        .zip(predictions)
        .enumerate()
        .map(|(i, (label, prediction))| {
            let row = label_index.insert(label.clone());
            let col = prediction_index.insert(prediction.clone());
            let weight = weights.map_or(1.0, |w| w[i]);
            (row, col, weight)
        })
        .collect();

    IndexedPairs {
        labels: label_index,
        predictions: prediction_index,
        cells,
    }
}

impl<L: Hash + Eq, P: Hash + Eq> IndexedPairs<L, P> {
    fn into_table(
        self,
        row_remap: Option<&[usize]>,
        col_remap: Option<&[usize]>,
    ) -> ContingencyTable<L, P> {
        let mut matrix = ContingencyMatrix::zeros((self.labels.len(), self.predictions.len()));
        for &(row, col, weight) in &self.cells {
            let row = row_remap.map_or(row, |remap| remap[row]);
            let col = col_remap.map_or(col, |remap| remap[col]);
            matrix[[row, col]] += weight;
        }

        log::debug!(
            "Built {}x{} contingency table from {} pairs",
            self.labels.len(),
            self.predictions.len(),
            self.cells.len()
        );
        ContingencyTable::from_parts(matrix, self.labels, self.predictions)
    }
}

impl<L: Hash + Eq + Ord, P: Hash + Eq + Ord> IndexedPairs<L, P> {
    fn into_sorted_table(self) -> ContingencyTable<L, P> {
        let (labels, row_remap) = self.labels.into_sorted();
        let (predictions, col_remap) = self.predictions.into_sorted();
        IndexedPairs {
            labels,
            predictions,
            cells: self.cells,
        }
        .into_table(Some(row_remap.as_slice()), Some(col_remap.as_slice()))
    }
}
