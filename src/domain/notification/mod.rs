//! Notification domain module.
//!
//! Builds the one email each accepted IPN produces: a label confirmation
//! or an error report for the administrator.

mod email;

pub use email::{LabelCreatedEmail, NotificationEmail};
