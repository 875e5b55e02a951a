//! Email adapters.
//!
//! Implements the `Mailer` port:
//! - `SmtpMailer` - lettre SMTP relay (STARTTLS or implicit TLS)
//! - `MockMailer` - In-memory double for tests

mod mock_mailer;
mod smtp_mailer;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;
