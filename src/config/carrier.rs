//! Carrier (shipping label API) configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Carrier configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarrierConfig {
    /// API key sent with every label request
    #[serde(default = "empty_secret")]
    pub api_key: SecretString,

    /// Label creation endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Header carrying the API key
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,

    /// Carrier service code for every label
    #[serde(default = "default_service_code")]
    pub service_code: String,

    /// Timeout for the label request in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Fixed package weight
    #[serde(default = "default_package_weight")]
    pub package_weight: f64,

    /// Unit for `package_weight` (pound, ounce, gram, kilogram)
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,

    /// Ship-from address
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default)]
    pub from_phone: String,
    #[serde(default)]
    pub from_address1: String,
    #[serde(default)]
    pub from_city: String,
    #[serde(default)]
    pub from_state: String,
    #[serde(default)]
    pub from_postal_code: String,
    #[serde(default = "default_country")]
    pub from_country: String,
}

impl CarrierConfig {
    /// Label request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate carrier configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("CARRIER_API_KEY"));
        }
        if !self.api_url.starts_with("https://") && !self.api_url.starts_with("http://") {
            return Err(ValidationError::InvalidCarrierUrl);
        }
        if production && !self.api_url.starts_with("https://") {
            return Err(ValidationError::CarrierUrlMustBeHttps);
        }
        if http::HeaderName::from_bytes(self.api_key_header.as_bytes()).is_err() {
            return Err(ValidationError::InvalidApiKeyHeader);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(self.package_weight.is_finite() && self.package_weight > 0.0) {
            return Err(ValidationError::InvalidPackageWeight);
        }
        Ok(())
    }
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            api_key: empty_secret(),
            api_url: default_api_url(),
            api_key_header: default_api_key_header(),
            service_code: default_service_code(),
            timeout_secs: default_timeout(),
            package_weight: default_package_weight(),
            weight_unit: default_weight_unit(),
            from_name: default_from_name(),
            from_phone: String::new(),
            from_address1: String::new(),
            from_city: String::new(),
            from_state: String::new(),
            from_postal_code: String::new(),
            from_country: default_country(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_api_url() -> String {
    "https://api.shipengine.com/v1/labels".to_string()
}

fn default_api_key_header() -> String {
    "API-Key".to_string()
}

fn default_service_code() -> String {
    "usps_priority_mail".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_package_weight() -> f64 {
    1.0
}

fn default_weight_unit() -> String {
    "pound".to_string()
}

fn default_from_name() -> String {
    "Shipping Department".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CarrierConfig {
        CarrierConfig {
            api_key: SecretString::new("TEST_carrier_key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_carrier_config_defaults() {
        let config = CarrierConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.api_key_header, "API-Key");
        assert_eq!(config.from_country, "US");
        assert_eq!(config.package_weight, 1.0);
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = CarrierConfig::default();
        assert_eq!(
            config.validate(false),
            Err(ValidationError::MissingRequired("CARRIER_API_KEY"))
        );
    }

    #[test]
    fn test_validation_relative_url() {
        let config = CarrierConfig {
            api_url: "/v1/labels".to_string(),
            ..valid()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidCarrierUrl));
    }

    #[test]
    fn test_plain_http_only_outside_production() {
        let config = CarrierConfig {
            api_url: "http://localhost:9000/v1/labels".to_string(),
            ..valid()
        };
        assert!(config.validate(false).is_ok());
        assert_eq!(
            config.validate(true),
            Err(ValidationError::CarrierUrlMustBeHttps)
        );
    }

    #[test]
    fn test_validation_invalid_header_name() {
        let config = CarrierConfig {
            api_key_header: "API Key".to_string(),
            ..valid()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidApiKeyHeader));
    }

    #[test]
    fn test_validation_invalid_weight() {
        let config = CarrierConfig {
            package_weight: 0.0,
            ..valid()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidPackageWeight));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = CarrierConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate(true).is_ok());
    }
}
