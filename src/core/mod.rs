//! Core infrastructure shared by the contingency builder and the aggregator.
//!
//! - [`types`]: matrix aliases and policy enumerations
//! - [`constants`]: defaults and environment variable names
//! - [`error`]: the crate error type and `Result` alias
//!
//! ```rust
//! use confusion_loss::core::{
//!     constants::DEFAULT_ALPHA,
//!     error::{ConfusionLossError, Result},
//!     types::{ContingencyMatrix, ZeroColumnPolicy},
//! };
//!
//! let matrix = ContingencyMatrix::zeros((2, 2));
//! assert_eq!(matrix.dim(), (2, 2));
//! assert_eq!(DEFAULT_ALPHA, 2.0);
//! assert_eq!(ZeroColumnPolicy::default(), ZeroColumnPolicy::Error);
//! ```

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{ConfusionLossError, Result};
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static LOGGING_INIT: Once = Once::new();
static LOGGING_READY: AtomicBool = AtomicBool::new(false);

/// Install `env_logger` as the `log` backend.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`. If another
/// logger was installed first it is left in place.
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("warn");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("A logger was already installed; keeping it");
        }
        LOGGING_READY.store(true, Ordering::Release);
        log::debug!("confusion_loss {} logging initialized", CONFUSION_LOSS_VERSION);
    });
}

/// Whether [`initialize_logging`] has run.
pub fn is_logging_initialized() -> bool {
    LOGGING_READY.load(Ordering::Acquire)
}
