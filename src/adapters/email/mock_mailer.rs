//! Mock mailer for testing.
//!
//! Keeps every email in memory. Failures can be injected per recipient so a
//! test can break the buyer email while the admin email still goes through.
//! Sends can also be stalled per recipient to imitate a hung relay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::notification::NotificationEmail;
use crate::ports::{MailError, Mailer};

/// In-memory mailer.
#[derive(Clone, Default)]
pub struct MockMailer {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    sent: Vec<NotificationEmail>,
    fail_all: bool,
    failing_recipients: Vec<String>,
    stalled_recipients: Vec<(String, Duration)>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mailer whose transport is down.
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().fail_all = true;
        mock
    }

    /// Fail sends addressed to `recipient` only.
    pub fn fail_for(&self, recipient: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .failing_recipients
            .push(recipient.into());
    }

    /// Delay sends addressed to `recipient` by `delay` before they complete.
    pub fn stall_for(&self, recipient: impl Into<String>, delay: Duration) {
        self.inner
            .lock()
            .unwrap()
            .stalled_recipients
            .push((recipient.into(), delay));
    }

    /// Emails delivered so far (failed attempts are not included).
    pub fn sent(&self) -> Vec<NotificationEmail> {
        self.inner.lock().unwrap().sent.clone()
    }

    pub fn sent_count(&self) -> usize {
        self.inner.lock().unwrap().sent.len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &NotificationEmail) -> Result<(), MailError> {
        let stall = self
            .inner
            .lock()
            .unwrap()
            .stalled_recipients
            .iter()
            .find(|(r, _)| r == &email.to)
            .map(|(_, delay)| *delay);
        if let Some(delay) = stall {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.inner.lock().unwrap();
        if state.fail_all || state.failing_recipients.iter().any(|r| r == &email.to) {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        state.sent.push(email.clone());
        Ok(())
    }
}
