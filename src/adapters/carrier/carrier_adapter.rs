//! HTTP carrier label adapter.
//!
//! Implements the `LabelProvider` trait against a JSON label-creation
//! endpoint authenticated with an API-key header.
//!
//! # Configuration
//!
//! ```ignore
//! let adapter = HttpLabelProvider::new(&config.carrier)?;
//! let label = adapter.create_label(&request).await?;
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::CarrierConfig;
use crate::domain::shipping::{ShipmentRequest, ShippingLabel};
use crate::ports::{LabelError, LabelProvider};

/// Response locations of the label link, in lookup order.
///
/// Carriers either nest the download under `label_download` or return a flat
/// `label_url`.
const LABEL_URL_POINTERS: &[&str] = &["/label_download/pdf", "/label_download/href", "/label_url"];

/// Longest carrier error body carried into an error message.
const MAX_ERROR_BODY: usize = 512;

/// Carrier label adapter over HTTPS.
pub struct HttpLabelProvider {
    api_url: String,
    api_key_header: String,
    api_key: SecretString,
    http_client: reqwest::Client,
}

impl HttpLabelProvider {
    /// Create a new adapter with the given configuration.
    ///
    /// The configured timeout bounds the whole request, body included.
    pub fn new(config: &CarrierConfig) -> Result<Self, LabelError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LabelError::Network(e.to_string()))?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key_header: config.api_key_header.clone(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl LabelProvider for HttpLabelProvider {
    async fn create_label(&self, request: &ShipmentRequest) -> Result<ShippingLabel, LabelError> {
        let response = self
            .http_client
            .post(&self.api_url)
            .header(self.api_key_header.as_str(), self.api_key.expose_secret().as_str())
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                order_id = %request.order_id(),
                "Carrier label request rejected"
            );
            return Err(LabelError::Rejected {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse carrier response");
            LabelError::InvalidResponse(e.to_string())
        })?;

        let label_url = extract_label_url(&json);
        if label_url.is_none() {
            tracing::warn!(
                order_id = %request.order_id(),
                "Carrier response carried no label link"
            );
        }

        Ok(ShippingLabel { label_url })
    }
}

/// Finds the label link in either supported response shape.
pub fn extract_label_url(response: &Value) -> Option<String> {
    LABEL_URL_POINTERS
        .iter()
        .filter_map(|pointer| response.pointer(pointer))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

fn map_transport_error(e: reqwest::Error) -> LabelError {
    if e.is_timeout() {
        tracing::error!("Carrier label request timed out");
        LabelError::Timeout
    } else {
        tracing::error!(error = %e, "Carrier label request failed");
        LabelError::Network(e.to_string())
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_nested_pdf_link() {
        let response = json!({"label_id": "se-1", "label_download": {"pdf": "https://c.example/1.pdf", "href": "https://c.example/1"}});
        assert_eq!(
            extract_label_url(&response).as_deref(),
            Some("https://c.example/1.pdf")
        );
    }

    #[test]
    fn falls_back_to_nested_href() {
        let response = json!({"label_download": {"pdf": "", "href": "https://c.example/1"}});
        assert_eq!(
            extract_label_url(&response).as_deref(),
            Some("https://c.example/1")
        );
    }

    #[test]
    fn extracts_flat_label_url() {
        let response = json!({"label_url": "https://c.example/flat.pdf"});
        assert_eq!(
            extract_label_url(&response).as_deref(),
            Some("https://c.example/flat.pdf")
        );
    }

    #[test]
    fn missing_link_is_none() {
        assert_eq!(extract_label_url(&json!({"status": "completed"})), None);
        assert_eq!(extract_label_url(&json!({"label_url": null})), None);
        assert_eq!(extract_label_url(&json!([])), None);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé...");
        assert_eq!(truncate("short", 10), "short");
    }
}
