//! Common test utilities for confusion loss integration tests.

#![allow(dead_code)]

use confusion_loss::ContingencyMatrix;
use rand::prelude::*;

/// Labels drawn from `num_labels` classes, seeded for reproducibility.
pub fn random_labels(num_samples: usize, num_labels: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples).map(|_| rng.gen_range(0..num_labels as u32)).collect()
}

/// Predictions that copy the label with probability `fidelity`, otherwise
/// pick a random cluster out of `num_clusters`.
pub fn noisy_predictions(
    labels: &[u32],
    num_clusters: usize,
    fidelity: f64,
    seed: u64,
) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    labels
        .iter()
        .map(|&label| {
            if rng.gen_bool(fidelity) {
                label % num_clusters as u32
            } else {
                rng.gen_range(0..num_clusters as u32)
            }
        })
        .collect()
}

/// Matrix where column `j` holds `counts[j]` observations of row `rows[j]` only.
pub fn pure_matrix(num_rows: usize, rows: &[usize], counts: &[f64]) -> ContingencyMatrix {
    let mut matrix = ContingencyMatrix::zeros((num_rows, rows.len()));
    for (col, (&row, &count)) in rows.iter().zip(counts).enumerate() {
        matrix[[row, col]] = count;
    }
    matrix
}

/// Matrix where every column is uniform over all rows.
pub fn uniform_matrix(num_rows: usize, column_counts: &[f64]) -> ContingencyMatrix {
    let mut matrix = ContingencyMatrix::zeros((num_rows, column_counts.len()));
    for (col, &count) in column_counts.iter().enumerate() {
        matrix.column_mut(col).fill(count);
    }
    matrix
}
