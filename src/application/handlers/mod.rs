//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ipn;

pub use ipn::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult, NotificationSettings,
};
