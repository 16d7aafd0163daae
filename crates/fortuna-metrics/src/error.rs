//! Metrics Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Metrics errors
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Event could not be delivered; `reason` is kept for logs only
    #[error("Failed to capture metric event.")]
    Capture { reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MetricsError {
    pub(crate) fn capture(reason: impl std::fmt::Display) -> Self {
        MetricsError::Capture {
            reason: reason.to_string(),
        }
    }
}
