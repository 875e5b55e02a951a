//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (IPN provider)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// Shared IPN secret used to key the HMAC-SHA512 signature
    #[serde(default = "empty_secret")]
    pub ipn_secret: SecretString,

    /// Payment statuses that trigger label creation (comma-separated)
    #[serde(default = "default_accepted_statuses")]
    pub accepted_statuses: String,
}

impl PaymentConfig {
    /// Get accepted statuses as a normalized (lowercase, trimmed) vector
    pub fn accepted_statuses_list(&self) -> Vec<String> {
        self.accepted_statuses
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate payment configuration
    ///
    /// An unset secret is a hard error: verifying against an empty HMAC key
    /// would let anyone forge notifications.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ipn_secret.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("IPN_SECRET"));
        }
        if self.accepted_statuses_list().is_empty() {
            return Err(ValidationError::NoAcceptedStatuses);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            ipn_secret: empty_secret(),
            accepted_statuses: default_accepted_statuses(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_accepted_statuses() -> String {
    "finished,confirmed".to_string()
}
