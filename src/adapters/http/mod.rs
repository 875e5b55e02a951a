//! HTTP adapters - REST API implementations.
//!
//! Assembles the service router:
//! - `POST /webhooks/ipn` - Payment notifications
//! - `GET /health` - Liveness check

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub mod ipn;

pub use ipn::{ipn_routes, IpnApiError, IpnAppState};

/// Create the complete service router.
///
/// # Example
///
/// ```ignore
/// let state = IpnAppState::new(handler);
/// let app = app_router(state, config.server.request_timeout());
/// axum::serve(listener, app).await?;
/// ```
pub fn app_router(state: IpnAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/webhooks", ipn_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "ok"
}
