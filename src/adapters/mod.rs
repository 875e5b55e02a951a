//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `carrier` - Shipping label API (HTTP, mock)
//! - `email` - Outbound email (SMTP, mock)
//! - `http` - Inbound webhook endpoint

pub mod carrier;
pub mod email;
pub mod http;

pub use carrier::{HttpLabelProvider, MockLabelProvider};
pub use email::{MockMailer, SmtpMailer};
pub use self::http::{app_router, IpnAppState};
