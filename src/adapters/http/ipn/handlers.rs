//! HTTP handlers for payment notifications.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::application::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult,
};
use crate::domain::ipn::{WebhookError, SIGNATURE_HEADER};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the IPN endpoint.
#[derive(Clone)]
pub struct IpnAppState {
    pub handler: Arc<HandlePaymentNotificationHandler>,
}

impl IpnAppState {
    pub fn new(handler: HandlePaymentNotificationHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhooks/ipn - Handle payment notification
///
/// A missing or non-ASCII signature header is treated as an empty signature,
/// which never verifies.
pub async fn handle_ipn(
    State(state): State<IpnAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, IpnApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let cmd = HandlePaymentNotificationCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    let message = match state.handler.handle(cmd).await? {
        HandlePaymentNotificationResult::Ignored { status } => {
            format!("Ignored payment status '{}'", status)
        }
        HandlePaymentNotificationResult::LabelSent { order_id, .. } => {
            format!("Label created for order {}", order_id)
        }
    };

    Ok((StatusCode::OK, message))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
///
/// Bodies stay generic; details go to the log and the admin email.
#[derive(Debug)]
pub struct IpnApiError(WebhookError);

impl From<WebhookError> for IpnApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for IpnApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let message = match &self.0 {
            WebhookError::InvalidSignature => "Invalid signature",
            WebhookError::Upstream(_) | WebhookError::Notification(_) => {
                "Label processing failed"
            }
        };
        (status, message).into_response()
    }
}
