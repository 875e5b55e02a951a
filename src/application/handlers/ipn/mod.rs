//! IPN handlers.
//!
//! ## Commands
//! - Processing signed payment notifications into shipping labels

mod handle_payment_notification;

pub use handle_payment_notification::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult, NotificationSettings,
};
