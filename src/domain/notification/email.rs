//! Notification email content.

use chrono::{DateTime, Utc};

use crate::domain::ipn::PaymentSplit;

const MISSING_LINK_TEXT: &str =
    "The carrier accepted the shipment but did not return a download link. \
     The label can be retrieved from the carrier dashboard.";

/// A plain-text email, sent once and forgotten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Inputs for the success email.
#[derive(Debug, Clone)]
pub struct LabelCreatedEmail<'a> {
    pub order_id: &'a str,
    pub currency: &'a str,
    pub split: &'a PaymentSplit,
    pub label_url: Option<&'a str>,
}

impl NotificationEmail {
    /// Success email: label link, or the missing-link fallback text.
    pub fn label_created(to: impl Into<String>, details: LabelCreatedEmail<'_>) -> Self {
        let currency = details.currency.to_ascii_uppercase();
        let link_line = match details.label_url {
            Some(url) => format!("Download your shipping label: {}", url),
            None => MISSING_LINK_TEXT.to_string(),
        };

        let body = format!(
            "Payment received for order {order}.\n\n\
             Amount paid:  {amount} {currency}\n\
             Margin:       {margin} {currency}\n\
             Label budget: {label} {currency}\n\n\
             {link_line}\n",
            order = details.order_id,
            amount = details.split.amount,
            margin = details.split.margin,
            label = details.split.label_amount,
            currency = currency,
            link_line = link_line,
        );

        Self {
            to: to.into(),
            subject: format!("Shipping label created for order {}", details.order_id),
            body,
        }
    }

    /// Error report for the administrator.
    pub fn processing_failed(
        admin: impl Into<String>,
        order_id: &str,
        error: &str,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            to: admin.into(),
            subject: format!("Label creation failed for order {}", order_id),
            body: format!(
                "Processing a confirmed payment failed.\n\n\
                 Order:    {}\n\
                 Error:    {}\n\
                 Occurred: {}\n\n\
                 No label was emailed to the buyer. The payment provider may redeliver the notification.\n",
                order_id,
                error,
                occurred_at.to_rfc3339(),
            ),
        }
    }
}
