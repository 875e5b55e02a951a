//! HTTP adapter for the payment notification endpoint.
//!
//! - `POST /webhooks/ipn` - Handle signed payment notifications

pub mod handlers;
pub mod routes;

pub use handlers::{handle_ipn, IpnApiError, IpnAppState};
pub use routes::ipn_routes;
