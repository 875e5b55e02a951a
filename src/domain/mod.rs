//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `ipn` - Payment notification signature, payload and amount split
//! - `shipping` - Shipment request and label types
//! - `notification` - Confirmation and error-report emails

pub mod ipn;
pub mod notification;
pub mod shipping;
