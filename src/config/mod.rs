//! Configuration management.
//!
//! A [`ConfusionLossConfig`] can be built programmatically, loaded from a
//! `.json`/`.toml` file or read from `CONFUSION_LOSS_*` environment variables.

pub mod core;

pub use self::core::{validate_alpha, ConfusionLossConfig, ConfusionLossConfigBuilder};
