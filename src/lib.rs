//! Label Relay - Payment notification to shipping label bridge
//!
//! This crate receives signed instant payment notifications, buys a shipping
//! label for every completed payment and emails the label link to the buyer.
//! Failures after authentication are reported to an administrator by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
