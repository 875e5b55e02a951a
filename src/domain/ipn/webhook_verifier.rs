//! IPN webhook signature verification.
//!
//! The provider signs the notification body with HMAC-SHA512 after sorting the
//! top-level JSON keys. The verifier re-encodes the received body the same
//! way, recomputes the digest and compares it in constant time against the
//! hex signature from the request header.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::payload::WebhookPayload;
use super::webhook_errors::WebhookError;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the hex signature.
pub const SIGNATURE_HEADER: &str = "x-nowpayments-sig";

/// Verifier for IPN signatures.
pub struct IpnSignatureVerifier {
    /// Shared IPN secret from the provider dashboard.
    secret: SecretString,
}

impl IpnSignatureVerifier {
    /// Creates a new verifier with the given secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies the signature and returns the parsed payload.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the body; it must be a JSON object
    /// 2. Re-encode with top-level keys in ascending order
    /// 3. Compute HMAC-SHA512 over the canonical bytes
    /// 4. Compare lowercase hex digests in constant time
    ///
    /// # Errors
    ///
    /// Every failure, including malformed JSON and an empty secret, is
    /// `InvalidSignature`.
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<WebhookPayload, WebhookError> {
        let fields = parse_object(payload)?;
        let expected = self.digest(&canonical_bytes(&fields)?)?;

        if !constant_time_compare(expected.as_bytes(), signature.as_bytes()) {
            tracing::warn!(
                signature_len = signature.len(),
                "IPN signature mismatch"
            );
            return Err(WebhookError::InvalidSignature);
        }

        Ok(WebhookPayload::new(fields))
    }

    /// Signs a body the way the provider does.
    ///
    /// Used to produce reference signatures for tests and replay tooling.
    pub fn sign(&self, payload: &[u8]) -> Result<String, WebhookError> {
        let fields = parse_object(payload)?;
        self.digest(&canonical_bytes(&fields)?)
    }

    fn digest(&self, canonical: &[u8]) -> Result<String, WebhookError> {
        let key = self.secret.expose_secret();
        if key.is_empty() {
            tracing::error!("IPN secret is empty; refusing to verify");
            return Err(WebhookError::InvalidSignature);
        }

        let mut mac = HmacSha512::new_from_slice(key.as_bytes())
            .map_err(|_| WebhookError::InvalidSignature)?;
        mac.update(canonical);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

fn parse_object(payload: &[u8]) -> Result<Map<String, Value>, WebhookError> {
    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => {
            tracing::warn!("IPN body is not a JSON object");
            Err(WebhookError::InvalidSignature)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse IPN body");
            Err(WebhookError::InvalidSignature)
        }
    }
}

/// Re-encodes the fields with the top-level keys sorted.
///
/// Nested objects keep their received key order.
fn canonical_bytes(fields: &Map<String, Value>) -> Result<Vec<u8>, WebhookError> {
    let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let sorted: Map<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    serde_json::to_vec(&sorted).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode canonical IPN body");
        WebhookError::InvalidSignature
    })
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
