//! Core data types shared across the crate.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ConfusionLossError;

/// Cell value of a contingency matrix.
/// Unweighted builds store exact integer counts; weighted builds store sums of weights.
pub type Count = f64;

/// Owned G×P contingency matrix (rows = true labels, columns = predictions).
pub type ContingencyMatrix = Array2<Count>;

/// Borrowed view of a contingency matrix.
pub type ContingencyView<'a> = ArrayView2<'a, Count>;

/// What to do with a predicted category whose column sums to zero.
///
/// Such a column cannot occur when the matrix is built from real pairs, but
/// it can when a matrix is supplied directly or when every weight in a column
/// is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroColumnPolicy {
    /// Fail with `DegenerateColumn`
    #[default]
    Error,
    /// Treat the column as perfectly pure (normalized entropy 0)
    Pure,
    /// Treat the column as maximally mixed (normalized entropy 1)
    Uniform,
    /// Leave the column out of the power mean
    Skip,
}

impl fmt::Display for ZeroColumnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroColumnPolicy::Error => write!(f, "error"),
            ZeroColumnPolicy::Pure => write!(f, "pure"),
            ZeroColumnPolicy::Uniform => write!(f, "uniform"),
            ZeroColumnPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for ZeroColumnPolicy {
    type Err = ConfusionLossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(ZeroColumnPolicy::Error),
            "pure" => Ok(ZeroColumnPolicy::Pure),
            "uniform" => Ok(ZeroColumnPolicy::Uniform),
            "skip" => Ok(ZeroColumnPolicy::Skip),
            other => Err(ConfusionLossError::invalid_parameter(
                "zero_column_policy",
                other,
                "expected one of: error, pure, uniform, skip",
            )),
        }
    }
}

/// Rule for assigning row and column indices to distinct values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Index values in the order they are first seen
    #[default]
    FirstSeen,
    /// Index values in ascending `Ord` order
    Sorted,
}

impl fmt::Display for CategoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOrder::FirstSeen => write!(f, "first_seen"),
            CategoryOrder::Sorted => write!(f, "sorted"),
        }
    }
}

impl FromStr for CategoryOrder {
    type Err = ConfusionLossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_seen" | "first-seen" => Ok(CategoryOrder::FirstSeen),
            "sorted" => Ok(CategoryOrder::Sorted),
            other => Err(ConfusionLossError::invalid_parameter(
                "category_order",
                other,
                "expected one of: first_seen, sorted",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ZeroColumnPolicy::default(), ZeroColumnPolicy::Error);
        assert_eq!(CategoryOrder::default(), CategoryOrder::FirstSeen);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("pure".parse::<ZeroColumnPolicy>().unwrap(), ZeroColumnPolicy::Pure);
        assert_eq!(" Uniform ".parse::<ZeroColumnPolicy>().unwrap(), ZeroColumnPolicy::Uniform);
        assert!("nan".parse::<ZeroColumnPolicy>().is_err());

        for policy in [
            ZeroColumnPolicy::Error,
            ZeroColumnPolicy::Pure,
            ZeroColumnPolicy::Uniform,
            ZeroColumnPolicy::Skip,
        ] {
            assert_eq!(policy.to_string().parse::<ZeroColumnPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!("first-seen".parse::<CategoryOrder>().unwrap(), CategoryOrder::FirstSeen);
        assert_eq!("sorted".parse::<CategoryOrder>().unwrap(), CategoryOrder::Sorted);
        assert!("random".parse::<CategoryOrder>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ZeroColumnPolicy::Skip).unwrap();
        assert_eq!(json, "\"skip\"");
        let order: CategoryOrder = serde_json::from_str("\"first_seen\"").unwrap();
        assert_eq!(order, CategoryOrder::FirstSeen);
    }
}
