//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Message used when a failure carries no usable text
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Payment-related errors
///
/// The `Display` text of each variant is the message the payment flow
/// surfaces to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// SDK client or its elements context is not initialized
    #[error("Stripe has not loaded yet")]
    NotLoaded,

    /// Intent creation endpoint answered with a non-success status
    #[error("{0}")]
    IntentRejected(String),

    /// No card input is mounted in the elements context
    #[error("Card element not found")]
    CardElementMissing,

    /// Transport failure talking to the payment service
    #[error("{0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// The SDK raised an error object with a message
    #[error("{0}")]
    Sdk(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Something was raised that is not an error value
    #[error("Unknown error")]
    Unrecognized,
}

impl PaymentError {
    /// Message reported by the payment flow for this error.
    ///
    /// Never empty: a recognized error with blank text falls back to
    /// [`UNKNOWN_ERROR`].
    pub fn flow_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PaymentError::Decode(err.to_string())
        } else {
            PaymentError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(PaymentError::NotLoaded.flow_message(), "Stripe has not loaded yet");
        assert_eq!(PaymentError::CardElementMissing.flow_message(), "Card element not found");
        assert_eq!(PaymentError::Unrecognized.flow_message(), "Unknown error");
    }

    #[test]
    fn test_blank_message_falls_back() {
        assert_eq!(PaymentError::Sdk("  ".into()).flow_message(), UNKNOWN_ERROR);
        assert_eq!(PaymentError::Network("Failed to fetch".into()).flow_message(), "Failed to fetch");
    }
}
