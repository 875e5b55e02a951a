//! Axum router configuration for the IPN endpoint.

use axum::{routing::post, Router};

use super::handlers::{handle_ipn, IpnAppState};

/// Create the webhook router.
///
/// Mounted under `/webhooks`. Only POST is routed, so axum answers every
/// other method with 405 before the handler runs.
///
/// # Routes
/// - `POST /ipn` - Handle payment notifications
pub fn ipn_routes() -> Router<IpnAppState> {
    Router::new().route("/ipn", post(handle_ipn))
}
