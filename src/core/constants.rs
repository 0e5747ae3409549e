//! Default values and environment variable names.

use crate::core::types::*;

/// Default power-mean exponent.
/// Squares each normalized column entropy, penalizing mixed columns more than a plain mean.
pub const DEFAULT_ALPHA: f64 = 2.0;

/// Default handling of all-zero prediction columns.
pub const DEFAULT_ZERO_COLUMN_POLICY: ZeroColumnPolicy = ZeroColumnPolicy::Error;

/// Default row/column index assignment.
pub const DEFAULT_CATEGORY_ORDER: CategoryOrder = CategoryOrder::FirstSeen;

/// Environment variable overriding the exponent.
pub const ENV_ALPHA: &str = "CONFUSION_LOSS_ALPHA";

/// Environment variable overriding the zero-column policy.
pub const ENV_ZERO_COLUMN_POLICY: &str = "CONFUSION_LOSS_ZERO_COLUMN_POLICY";

/// Environment variable overriding the category ordering.
pub const ENV_CATEGORY_ORDER: &str = "CONFUSION_LOSS_CATEGORY_ORDER";

/// Library version string.
pub const CONFUSION_LOSS_VERSION: &str = env!("CARGO_PKG_VERSION");
