//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LabelProvider` - Carrier label purchase
//! - `Mailer` - Outbound notification email

mod label_provider;
mod mailer;

pub use label_provider::{LabelError, LabelProvider};
pub use mailer::{MailError, Mailer};
