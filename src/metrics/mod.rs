//! Evaluation metrics over contingency matrices.
//!
//! The [`confusion`] module implements the confusion loss; [`entropy`]
//! holds the entropy and power-mean building blocks it is made of.
//!
//! # Examples
//!
//! ```rust
//! use confusion_loss::metrics::{ConfusionLoss, MetricCalculator};
//! use confusion_loss::{ConfusionLossConfigBuilder, ZeroColumnPolicy};
//! use ndarray::array;
//!
//! # fn example() -> confusion_loss::Result<()> {
//! let config = ConfusionLossConfigBuilder::new()
//!     .alpha(3.0)
//!     .zero_column_policy(ZeroColumnPolicy::Skip)
//!     .build()?;
//! let calculator = ConfusionLoss::new(config)?;
//!
//! let matrix = array![[8.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
//! let result = calculator.evaluate(matrix.view())?;
//! println!("{}: {:.4}", calculator.name(), result.loss);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod confusion;
pub mod entropy;

pub use confusion::{
    confusion_loss, confusion_loss_from_labels, confusion_loss_with_config, ConfusionLoss,
    ConfusionLossResult,
};
pub use entropy::{normalized_entropy, power_mean, shannon_entropy};

use crate::core::{error::Result, types::ContingencyView};

/// Common trait for metrics computed from a contingency matrix.
pub trait MetricCalculator {
    /// The type of result returned by this metric calculator.
    type Output;

    /// Evaluate the metric on a G×P contingency matrix.
    fn evaluate(&self, matrix: ContingencyView<'_>) -> Result<Self::Output>;

    /// Get the name of this metric calculator.
    fn name(&self) -> &'static str;
}
