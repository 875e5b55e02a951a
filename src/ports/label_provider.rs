//! Label provider port for carrier integrations.
//!
//! Defines the contract for shipping-label APIs. Implementations make one
//! outbound call per request and never retry.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::shipping::{ShipmentRequest, ShippingLabel};

/// Port for shipping-label creation.
#[async_trait]
pub trait LabelProvider: Send + Sync {
    /// Purchase a label for the shipment.
    ///
    /// A carrier response without a download link is a success with
    /// `label_url: None`, not an error.
    async fn create_label(&self, request: &ShipmentRequest) -> Result<ShippingLabel, LabelError>;
}

/// Label creation failures. All of them surface as an upstream failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    /// The call did not complete within the configured timeout.
    #[error("carrier request timed out")]
    Timeout,

    /// Connection or transport failure.
    #[error("carrier request failed: {0}")]
    Network(String),

    /// The carrier answered with a non-success status.
    #[error("carrier rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The carrier answered 2xx with a body that is not JSON.
    #[error("carrier returned an unreadable response: {0}")]
    InvalidResponse(String),
}
