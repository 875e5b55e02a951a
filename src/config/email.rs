//! Email configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Email configuration (SMTP)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    /// Administrator address: fallback recipient and error reports
    #[serde(default)]
    pub admin_email: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: String,

    /// SMTP port (587 for STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_username: Option<String>,

    /// SMTP password
    pub smtp_password: Option<SecretString>,

    /// Use STARTTLS; when false the connection is implicit TLS
    #[serde(default = "default_starttls")]
    pub smtp_starttls: bool,

    /// Upper bound on one complete send, connection included
    #[serde(default = "default_smtp_timeout")]
    pub smtp_timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Send timeout as a `Duration`
    pub fn smtp_timeout(&self) -> Duration {
        Duration::from_secs(self.smtp_timeout_secs)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.admin_email.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_EMAIL"));
        }
        if !looks_like_email(&self.admin_email) {
            return Err(ValidationError::InvalidAdminEmail);
        }
        if !looks_like_email(&self.from_email) {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.smtp_host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_HOST"));
        }
        if self.smtp_port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.smtp_timeout_secs == 0 || self.smtp_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.smtp_username.is_some() != self.smtp_password.is_some() {
            return Err(ValidationError::IncompleteSmtpCredentials);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            smtp_starttls: default_starttls(),
            smtp_timeout_secs: default_smtp_timeout(),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

fn default_from_email() -> String {
    "noreply@example.com".to_string()
}

fn default_from_name() -> String {
    "Label Relay".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_starttls() -> bool {
    true
}

fn default_smtp_timeout() -> u64 {
    5
}
