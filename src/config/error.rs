//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error(
        "Request timeout of {request_secs}s must exceed the carrier timeout plus two email sends ({downstream_secs}s)"
    )]
    TimeoutBudgetExceeded {
        request_secs: u64,
        downstream_secs: u64,
    },

    #[error("No accepted payment statuses configured")]
    NoAcceptedStatuses,

    #[error("Carrier API URL must be an absolute http(s) URL")]
    InvalidCarrierUrl,

    #[error("Carrier API URL must use HTTPS in production")]
    CarrierUrlMustBeHttps,

    #[error("Invalid carrier API key header name")]
    InvalidApiKeyHeader,

    #[error("Package weight must be positive")]
    InvalidPackageWeight,

    #[error("Invalid admin email address")]
    InvalidAdminEmail,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("SMTP username and password must be set together")]
    IncompleteSmtpCredentials,
}
