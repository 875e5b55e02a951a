//! SMTP mailer using lettre
//!
//! Sends notification emails through the configured relay.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;

use crate::config::EmailConfig;
use crate::domain::notification::NotificationEmail;
use crate::ports::{MailError, Mailer};

/// SMTP mailer using lettre
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Create a new SMTP mailer with the given configuration
    ///
    /// No connection is opened until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let mut builder = if config.smtp_starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        }
        .map_err(|e| MailError::Transport(format!("Failed to create SMTP transport: {}", e)))?;

        builder = builder
            .port(config.smtp_port)
            .timeout(Some(config.smtp_timeout()));

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            let credentials =
                Credentials::new(username.clone(), password.expose_secret().clone());
            builder = builder.credentials(credentials);
        }

        let from = parse_mailbox(&config.from_header())?;

        tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            starttls = config.smtp_starttls,
            timeout_secs = config.smtp_timeout_secs,
            "SMTP mailer initialized"
        );

        Ok(Self {
            transport: builder.build(),
            from,
            host: config.smtp_host.clone(),
            port: config.smtp_port,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &NotificationEmail) -> Result<(), MailError> {
        let message = build_message(&self.from, email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!(to = %email.to, subject = %email.subject, "Email sent");
        Ok(())
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("from", &self.from.to_string())
            .finish()
    }
}

/// Builds a plain-text message.
fn build_message(from: &Mailbox, email: &NotificationEmail) -> Result<Message, MailError> {
    let to = parse_mailbox(&email.to)?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
