//! Delivery error type

use thiserror::Error;

/// Raised whenever the email delivery call rejects, for any reason.
///
/// Causes (network failure, bad credentials, service-side rejection) are not
/// distinguished; the reason only ends up in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("delivery failed: {reason}")]
pub struct DeliveryError {
    pub reason: String,
}

impl DeliveryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = DeliveryError::new("The Public Key is invalid");
        assert_eq!(err.to_string(), "delivery failed: The Public Key is invalid");
    }

    #[test]
    fn test_errors_with_same_reason_are_equal() {
        assert_eq!(DeliveryError::new("timeout"), DeliveryError::new("timeout"));
    }
}
