//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LABEL_RELAY` prefix and nested values use double underscores as separators.
//!
//! Every section rejects unknown keys, so a misspelled variable such as
//! `LABEL_RELAY__PAYMENT__IPN_SECRT` fails loudly instead of leaving the
//! secret unset.
//!
//! # Example
//!
//! ```no_run
//! use label_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! ```

mod carrier;
mod email;
mod error;
mod payment;
mod server;

pub use carrier::CarrierConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables and
/// validates the result before handing it out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment provider configuration (IPN secret, accepted statuses)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Carrier label API configuration
    #[serde(default)]
    pub carrier: CarrierConfig,

    /// Email configuration (SMTP, admin address)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load and validate configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LABEL_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Runs [`AppConfig::validate`]
    ///
    /// # Environment Variable Format
    ///
    /// - `LABEL_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LABEL_RELAY__PAYMENT__IPN_SECRET=...` -> `payment.ipn_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed, an unknown key is
    /// present, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LABEL_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        self.carrier.validate(self.is_production())?;
        self.email.validate()?;
        self.validate_timeout_budget()?;
        Ok(())
    }

    /// The router timeout drops the handler outright, so it has to outlast
    /// the label call, the success email and the admin report together.
    fn validate_timeout_budget(&self) -> Result<(), ValidationError> {
        let request_secs = self.server.request_timeout_secs;
        let downstream_secs = self
            .carrier
            .timeout_secs
            .saturating_add(self.email.smtp_timeout_secs.saturating_mul(2));
        if request_secs <= downstream_secs {
            return Err(ValidationError::TimeoutBudgetExceeded {
                request_secs,
                downstream_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[(&str, &str)] = &[
        ("LABEL_RELAY__PAYMENT__IPN_SECRET", "ipn-secret"),
        ("LABEL_RELAY__CARRIER__API_KEY", "TEST_carrier"),
        ("LABEL_RELAY__EMAIL__ADMIN_EMAIL", "admin@example.com"),
        ("LABEL_RELAY__EMAIL__SMTP_HOST", "smtp.example.com"),
    ];

    const OPTIONAL: &[&str] = &[
        "LABEL_RELAY__SERVER__PORT",
        "LABEL_RELAY__SERVER__ENVIRONMENT",
        "LABEL_RELAY__PAYMENT__IPN_SECRT",
        "LABEL_RELAY__CARRIER__TIMEOUT_SECS",
    ];

    fn set_minimal_env() {
        for (key, value) in VARS {
            env::set_var(key, value);
        }
    }

    fn clear_env() {
        for (key, _) in VARS {
            env::remove_var(key);
        }
        for key in OPTIONAL {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.payment.ipn_secret.expose_secret(), "ipn-secret");
        assert_eq!(config.email.admin_email, "admin@example.com");
        assert_eq!(config.carrier.timeout_secs, 15);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::remove_var("LABEL_RELAY__PAYMENT__IPN_SECRET");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired(
                "IPN_SECRET"
            )))
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LABEL_RELAY__PAYMENT__IPN_SECRT", "typo");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_custom_values_are_parsed() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LABEL_RELAY__SERVER__PORT", "3000");
        env::set_var("LABEL_RELAY__CARRIER__TIMEOUT_SECS", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.carrier.timeout_secs, 5);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LABEL_RELAY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_default_config_does_not_validate() {
        assert!(AppConfig::default().validate().is_err());
    }

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.payment.ipn_secret = secrecy::SecretString::new("ipn-secret".to_string());
        config.carrier.api_key = secrecy::SecretString::new("TEST_carrier".to_string());
        config.email.admin_email = "admin@example.com".to_string();
        config.email.smtp_host = "smtp.example.com".to_string();
        config
    }

    #[test]
    fn test_default_timeouts_fit_request_budget() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_carrier_timeout_must_fit_request_budget() {
        let mut config = valid_config();
        config.carrier.timeout_secs = 30;

        assert_eq!(
            config.validate(),
            Err(ValidationError::TimeoutBudgetExceeded {
                request_secs: 30,
                downstream_secs: 40,
            })
        );
    }

    #[test]
    fn test_email_timeouts_count_twice_against_request_budget() {
        let mut config = valid_config();
        config.carrier.timeout_secs = 10;
        config.email.smtp_timeout_secs = 10;

        // 10 + 2 * 10 == 30 leaves no headroom
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TimeoutBudgetExceeded { .. })
        ));

        config.server.request_timeout_secs = 31;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_budget_is_checked_on_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LABEL_RELAY__CARRIER__TIMEOUT_SECS", "25");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::TimeoutBudgetExceeded { .. }
            ))
        ));
    }
}
