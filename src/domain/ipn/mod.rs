//! IPN (Instant Payment Notification) domain module.
//!
//! # Module Structure
//!
//! - `webhook_verifier` - HMAC-SHA512 signature check over the canonical body
//! - `payload` - Verified payload and the declarative field-mapping table
//! - `split` - Margin / label-budget split in integer cents
//! - `webhook_errors` - Error taxonomy with HTTP status mapping

mod payload;
mod split;
mod webhook_errors;
mod webhook_verifier;

pub use payload::{Field, WebhookPayload, FIELD_MAP};
pub use split::{Money, PaymentSplit, MARGIN_PERCENT};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{IpnSignatureVerifier, SIGNATURE_HEADER};
