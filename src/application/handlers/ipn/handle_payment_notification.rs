//! HandlePaymentNotificationHandler - Command handler for payment IPN webhooks.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::config::AppConfig;
use crate::domain::ipn::{IpnSignatureVerifier, PaymentSplit, WebhookError, WebhookPayload};
use crate::domain::notification::{LabelCreatedEmail, NotificationEmail};
use crate::domain::shipping::{Address, ShipmentRequest, ShipmentTemplate, Weight};
use crate::ports::{LabelProvider, MailError, Mailer};

/// Command to handle a payment notification.
#[derive(Debug, Clone)]
pub struct HandlePaymentNotificationCommand {
    /// Raw request body.
    pub payload: Vec<u8>,
    /// Signature header value; empty when the header was absent.
    pub signature: String,
}

/// Result of notification processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlePaymentNotificationResult {
    /// Status not in the accepted set; nothing was done.
    Ignored { status: String },
    /// Label purchased and confirmation emailed.
    LabelSent {
        order_id: String,
        recipient: String,
        label_url: Option<String>,
    },
}

/// Per-deployment inputs of the handler.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// Lowercase statuses that trigger label creation.
    pub accepted_statuses: Vec<String>,
    /// Fallback recipient and error-report address.
    pub admin_email: String,
    pub shipment_template: ShipmentTemplate,
    /// Upper bound on each email send, whatever the transport does.
    pub mail_timeout: Duration,
}

impl NotificationSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let carrier = &config.carrier;
        Self {
            accepted_statuses: config.payment.accepted_statuses_list(),
            admin_email: config.email.admin_email.trim().to_string(),
            shipment_template: ShipmentTemplate {
                ship_from: Address {
                    name: carrier.from_name.clone(),
                    phone: carrier.from_phone.clone(),
                    address_line1: carrier.from_address1.clone(),
                    city_locality: carrier.from_city.clone(),
                    state_province: carrier.from_state.clone(),
                    postal_code: carrier.from_postal_code.clone(),
                    country_code: carrier.from_country.clone(),
                },
                service_code: carrier.service_code.clone(),
                weight: Weight {
                    value: carrier.package_weight,
                    unit: carrier.weight_unit.clone(),
                },
            },
            mail_timeout: config.email.smtp_timeout(),
        }
    }

    fn accepts(&self, status: &str) -> bool {
        self.accepted_statuses.iter().any(|s| s == status)
    }
}

/// Handler for processing payment notifications.
///
/// Verifies the signature, buys a label for accepted payments and sends
/// exactly one email: the confirmation, or an error report to the
/// administrator when anything downstream fails. Holds no mutable state.
pub struct HandlePaymentNotificationHandler {
    verifier: Arc<IpnSignatureVerifier>,
    label_provider: Arc<dyn LabelProvider>,
    mailer: Arc<dyn Mailer>,
    settings: NotificationSettings,
}

impl HandlePaymentNotificationHandler {
    pub fn new(
        verifier: Arc<IpnSignatureVerifier>,
        label_provider: Arc<dyn LabelProvider>,
        mailer: Arc<dyn Mailer>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            verifier,
            label_provider,
            mailer,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandlePaymentNotificationCommand,
    ) -> Result<HandlePaymentNotificationResult, WebhookError> {
        // 1. Verify signature and parse payload
        let payload = self
            .verifier
            .verify_and_parse(&cmd.payload, &cmd.signature)?;

        // 2. Only completed payments ship
        let status = payload.status();
        if !self.settings.accepts(&status) {
            tracing::info!(status = %status, "IPN status ignored");
            return Ok(HandlePaymentNotificationResult::Ignored { status });
        }

        let order_id = payload.order_id();
        match self.create_and_notify(&payload, &order_id).await {
            Ok(result) => Ok(result),
            Err(err) => {
                self.report_failure(&order_id, &err).await;
                Err(err)
            }
        }
    }

    async fn create_and_notify(
        &self,
        payload: &WebhookPayload,
        order_id: &str,
    ) -> Result<HandlePaymentNotificationResult, WebhookError> {
        let currency = payload.currency();
        let split = PaymentSplit::from_amount(payload.amount());

        tracing::info!(
            order_id = %order_id,
            amount = %split.amount,
            margin = %split.margin,
            label_amount = %split.label_amount,
            currency = %currency,
            "Payment accepted, requesting label"
        );

        // 3. Buy the label
        let request = ShipmentRequest::for_order(
            &self.settings.shipment_template,
            order_id,
            payload.ship_to(),
            &split,
            &currency,
        );
        let label = self
            .label_provider
            .create_label(&request)
            .await
            .map_err(|e| WebhookError::Upstream(e.to_string()))?;

        // 4. Tell the buyer (or the admin when there is no buyer address)
        let recipient = payload
            .buyer_email()
            .unwrap_or_else(|| self.settings.admin_email.clone());
        let email = NotificationEmail::label_created(
            recipient.clone(),
            LabelCreatedEmail {
                order_id,
                currency: &currency,
                split: &split,
                label_url: label.label_url.as_deref(),
            },
        );
        self.send_mail(&email)
            .await
            .map_err(|e| WebhookError::Notification(e.to_string()))?;

        tracing::info!(
            order_id = %order_id,
            recipient = %recipient,
            has_label_link = label.label_url.is_some(),
            "Label emailed"
        );

        Ok(HandlePaymentNotificationResult::LabelSent {
            order_id: order_id.to_string(),
            recipient,
            label_url: label.label_url,
        })
    }

    async fn send_mail(&self, email: &NotificationEmail) -> Result<(), MailError> {
        tokio::time::timeout(self.settings.mail_timeout, self.mailer.send(email))
            .await
            .unwrap_or(Err(MailError::Timeout))
    }

    /// Best-effort error report; its own failure is logged and dropped.
    async fn report_failure(&self, order_id: &str, err: &WebhookError) {
        tracing::error!(order_id = %order_id, error = %err, "IPN processing failed");

        if !err.notifies_admin() {
            return;
        }

        let email = NotificationEmail::processing_failed(
            self.settings.admin_email.clone(),
            order_id,
            &err.to_string(),
            Utc::now(),
        );
        if let Err(mail_err) = self.send_mail(&email).await {
            tracing::error!(
                order_id = %order_id,
                error = %mail_err,
                "Failed to send admin error report"
            );
        }
    }
}
