//! # Confusion Loss
//!
//! Scores how well predicted cluster/category assignments align with
//! ground-truth labels, without requiring a one-to-one mapping between
//! predicted categories and labels.
//!
//! The computation has two stages:
//!
//! 1. **Contingency building**: paired labels and predictions become a G×P
//!    count matrix (rows = distinct labels, columns = distinct predictions).
//! 2. **Entropy aggregation**: each column's label distribution is scored
//!    by its base-2 entropy normalized by `log2(G)`, and the column scores
//!    are combined with a power mean of exponent `alpha`.
//!
//! A loss of 0 means every predicted category contains a single label; a
//! loss of 1 means every predicted category is as mixed as chance.
//!
//! ## Quick Start
//!
//! ```rust
//! use confusion_loss::{confusion_loss, confusion_loss_from_labels};
//! use ndarray::array;
//!
//! # fn main() -> confusion_loss::Result<()> {
//! let labels = ["cat", "cat", "dog", "dog", "dog"];
//! let clusters = [0, 0, 1, 1, 0];
//!
//! let (loss, table) = confusion_loss_from_labels(&labels, &clusters, 2.0)?;
//! assert!(loss > 0.0 && loss < 1.0);
//! assert_eq!(table.shape(), (2, 2));
//!
//! // The aggregator also accepts a precomputed matrix.
//! let matrix = array![[10.0, 0.0], [0.0, 4.0]];
//! assert_eq!(confusion_loss(matrix.view(), 2.0)?, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error type, shared types, constants and logging setup
//! - [`config`]: [`ConfusionLossConfig`] with file and environment loading
//! - [`contingency`]: [`ContingencyTable`] construction
//! - [`metrics`]: entropy helpers and the confusion loss itself
//! - [`report`]: serializable output for rendering consumers
//!
//! All computations are pure and synchronous; independent calls may run on
//! any number of threads without coordination.

#![doc(html_root_url = "https://docs.rs/confusion-loss/")]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Contingency table construction
pub mod contingency;

// Metric computation
pub mod metrics;

// Rendering hand-off
pub mod report;

pub use crate::core::{
    constants::*,
    error::{ConfusionLossError, Result},
    types::*,
};

pub use config::{ConfusionLossConfig, ConfusionLossConfigBuilder};

pub use contingency::{
    build_contingency, build_contingency_ordered, build_contingency_sorted,
    build_contingency_weighted, CategoryIndex, ContingencyTable,
};

pub use metrics::{
    confusion_loss, confusion_loss_from_labels, confusion_loss_with_config, ConfusionLoss,
    ConfusionLossResult, MetricCalculator,
};

pub use report::ConfusionLossReport;

pub use crate::core::constants::CONFUSION_LOSS_VERSION as VERSION;

/// Initialize logging for the library.
///
/// Optional: every computation works without it. Installs `env_logger`
/// driven by `RUST_LOG` (default `warn`) unless a logger already exists.
///
/// ```rust
/// confusion_loss::init();
/// assert!(confusion_loss::is_initialized());
/// ```
pub fn init() {
    crate::core::initialize_logging()
}

/// Check if [`init`] has run.
pub fn is_initialized() -> bool {
    crate::core::is_logging_initialized()
}
