//! Carrier label adapters.
//!
//! Implements the `LabelProvider` port:
//! - `HttpLabelProvider` - JSON label API over HTTPS with an API-key header
//! - `MockLabelProvider` - In-memory double with call tracking
//!
//! # Configuration
//!
//! Required environment variables:
//! - `LABEL_RELAY__CARRIER__API_KEY`: carrier API key
//! - `LABEL_RELAY__CARRIER__API_URL`: label endpoint (defaults to ShipEngine)

mod carrier_adapter;
mod mock_label_provider;

pub use carrier_adapter::{extract_label_url, HttpLabelProvider};
pub use mock_label_provider::MockLabelProvider;
