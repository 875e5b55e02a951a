//! Shipment request sent to the carrier label API.

use serde::Serialize;

use crate::domain::ipn::PaymentSplit;

/// Postal address in the carrier's field naming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub name: String,
    pub phone: String,
    pub address_line1: String,
    pub city_locality: String,
    pub state_province: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclaredValue {
    pub currency: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub weight: Weight,
    pub insured_value: DeclaredValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    pub service_code: String,
    pub external_order_id: String,
    pub ship_from: Address,
    pub ship_to: Address,
    pub packages: Vec<Package>,
}

/// Body of the label-creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRequest {
    pub label_format: String,
    pub label_download_type: String,
    pub shipment: Shipment,
}

/// The per-deployment parts of every shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentTemplate {
    pub ship_from: Address,
    pub service_code: String,
    pub weight: Weight,
}

impl ShipmentRequest {
    /// Builds a single-package shipment for an order.
    ///
    /// The package is declared at the label budget of the split.
    pub fn for_order(
        template: &ShipmentTemplate,
        order_id: &str,
        ship_to: Address,
        split: &PaymentSplit,
        currency: &str,
    ) -> Self {
        Self {
            label_format: "pdf".to_string(),
            label_download_type: "url".to_string(),
            shipment: Shipment {
                service_code: template.service_code.clone(),
                external_order_id: order_id.to_string(),
                ship_from: template.ship_from.clone(),
                ship_to,
                packages: vec![Package {
                    weight: template.weight.clone(),
                    insured_value: DeclaredValue {
                        currency: currency.to_string(),
                        amount: split.label_amount.as_major(),
                    },
                }],
            },
        }
    }

    pub fn order_id(&self) -> &str {
        &self.shipment.external_order_id
    }
}

/// Outcome of a successful label request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingLabel {
    /// Downloadable label; `None` when the carrier response carried no link.
    pub label_url: Option<String>,
}
