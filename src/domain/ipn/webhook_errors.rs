//! Webhook error types for IPN handling.
//!
//! Defines the error conditions of a single notification, with HTTP status
//! code mapping and whether the administrator should hear about it.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during IPN processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// Signature missing, wrong, or computed over a body that is not a JSON object.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Label API call failed or timed out.
    #[error("Label creation failed: {0}")]
    Upstream(String),

    /// Mail transport refused or failed to deliver the notification.
    #[error("Notification failed: {0}")]
    Notification(String),
}

impl WebhookError {
    /// Returns true if an error report should be mailed to the administrator.
    ///
    /// Authentication failures are never reported: anyone can post garbage
    /// at the endpoint.
    pub fn notifies_admin(&self) -> bool {
        matches!(
            self,
            WebhookError::Upstream(_) | WebhookError::Notification(_)
        )
    }

    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSignature => StatusCode::BAD_REQUEST,
            WebhookError::Upstream(_) | WebhookError::Notification(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
