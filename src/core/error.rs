//! Error handling and error types for confusion loss computation.
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! side is the single [`ConfusionLossError`] enum. Errors are reported
//! synchronously at the point of detection and never carry partial results.

use std::io;
use thiserror::Error;

/// Main error type for the confusion loss library.
#[derive(Error, Debug)]
pub enum ConfusionLossError {
    /// Malformed input data (mismatched lengths, negative or non-finite cells)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No observations were supplied
    #[error("Empty input: at least one label/prediction pair is required")]
    EmptyInput,

    /// Contingency matrix with a zero-sized dimension
    #[error("Invalid matrix shape: {rows}x{cols}, both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// A predicted category column whose counts sum to zero
    #[error("Degenerate column {column}: all counts are zero")]
    DegenerateColumn { column: usize },

    /// Configuration loading and parsing errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Results using ConfusionLossError
pub type Result<T> = std::result::Result<T, ConfusionLossError>;

impl ConfusionLossError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        ConfusionLossError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(rows: usize, cols: usize) -> Self {
        ConfusionLossError::InvalidShape { rows, cols }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        ConfusionLossError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate column error
    pub fn degenerate_column(column: usize) -> Self {
        ConfusionLossError::DegenerateColumn { column }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfusionLossError::Config {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ConfusionLossError::InvalidInput { .. } => "invalid_input",
            ConfusionLossError::EmptyInput => "empty_input",
            ConfusionLossError::InvalidShape { .. } => "invalid_shape",
            ConfusionLossError::InvalidParameter { .. } => "invalid_parameter",
            ConfusionLossError::DegenerateColumn { .. } => "degenerate_column",
            ConfusionLossError::Config { .. } => "config",
            ConfusionLossError::Io { .. } => "io",
            ConfusionLossError::Json { .. } => "json",
        }
    }
}

/// Return early with the given error if the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
