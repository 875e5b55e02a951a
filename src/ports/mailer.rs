//! Mailer port for outbound email.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationEmail;

/// Port for sending notification emails.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email. No delivery receipt is kept.
    async fn send(&self, email: &NotificationEmail) -> Result<(), MailError>;
}

/// Email sending failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("mail transport failed: {0}")]
    Transport(String),

    #[error("mail send timed out")]
    Timeout,
}
