//! Walkthrough error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Failure of the walkthrough run.
///
/// `From` impls let `?` lift configuration errors.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// A demonstration produced something other than its documented result.
    #[error("Scenario '{scenario}' expected {expected} but computed {actual}")]
    Mismatch {
        /// Name of the demonstration.
        scenario: String,
        /// Rendered expected value.
        expected: String,
        /// Rendered computed value.
        actual: String,
    },
}

impl WalkthroughError {
    /// Returns `true` if this is a [`WalkthroughError::Mismatch`].
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}
