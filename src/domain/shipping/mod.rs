//! Shipping domain module.
//!
//! Transient shipment requests and the label they produce. Nothing here is
//! stored.

mod shipment;

pub use shipment::{
    Address, DeclaredValue, Package, Shipment, ShipmentRequest, ShipmentTemplate, ShippingLabel,
    Weight,
};
