//! IPN payload and its field-mapping table.
//!
//! Providers and storefront plugins disagree on key names, so every value the
//! handler needs is looked up through [`FIELD_MAP`]: a canonical field mapped
//! to an ordered list of accepted source keys. The first key holding a
//! non-empty value wins.

use serde_json::{Map, Value};

use super::split::Money;
use crate::domain::shipping::Address;

/// Canonical payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Status,
    OrderId,
    Amount,
    Currency,
    BuyerEmail,
    ShipName,
    ShipPhone,
    ShipAddress1,
    ShipCity,
    ShipState,
    ShipPostalCode,
    ShipCountry,
}

/// Canonical field → accepted source keys, in priority order.
pub const FIELD_MAP: &[(Field, &[&str])] = &[
    (Field::Status, &["payment_status", "status"]),
    (Field::OrderId, &["order_id", "orderId", "payment_id"]),
    (Field::Amount, &["price_amount", "amount", "actually_paid"]),
    (Field::Currency, &["price_currency", "currency", "pay_currency"]),
    (Field::BuyerEmail, &["buyer_email", "customer_email", "email"]),
    (Field::ShipName, &["shipping_name", "customer_name", "name"]),
    (Field::ShipPhone, &["shipping_phone", "phone"]),
    (Field::ShipAddress1, &["shipping_address", "address_line1", "address"]),
    (Field::ShipCity, &["shipping_city", "city"]),
    (Field::ShipState, &["shipping_state", "state_province", "state"]),
    (Field::ShipPostalCode, &["shipping_postal_code", "postal_code", "zip"]),
    (Field::ShipCountry, &["shipping_country", "country_code", "country"]),
];

const DEFAULT_ORDER_ID: &str = "unknown";
const DEFAULT_CURRENCY: &str = "usd";
const DEFAULT_SHIP_NAME: &str = "Customer";
const DEFAULT_SHIP_COUNTRY: &str = "US";

impl Field {
    /// Source keys accepted for this field.
    pub fn source_keys(self) -> &'static [&'static str] {
        FIELD_MAP
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }
}

/// A verified IPN body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebhookPayload {
    fields: Map<String, Value>,
}

impl WebhookPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// First non-empty value among the field's source keys.
    ///
    /// Strings are trimmed; numbers and booleans are rendered as text.
    /// Nulls, objects and arrays are skipped.
    pub fn get(&self, field: Field) -> Option<String> {
        field
            .source_keys()
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(scalar_text)
    }

    /// Payment status, lowercased. Empty when absent.
    pub fn status(&self) -> String {
        self.get(Field::Status)
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default()
    }

    pub fn order_id(&self) -> String {
        self.get(Field::OrderId)
            .unwrap_or_else(|| DEFAULT_ORDER_ID.to_string())
    }

    /// Amount paid.
    ///
    /// Absent, unparseable, non-positive and out-of-range amounts all count
    /// as zero, so nothing negative or overflowing reaches the split.
    pub fn amount(&self) -> Money {
        let Some(raw) = self.get(Field::Amount) else {
            return Money::default();
        };
        match raw.parse::<f64>().ok().and_then(Money::from_major) {
            Some(amount) if amount.cents() > 0 => amount,
            _ => {
                tracing::warn!(amount = %raw, "Unusable IPN amount, treating as zero");
                Money::default()
            }
        }
    }

    pub fn currency(&self) -> String {
        self.get(Field::Currency)
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    }

    pub fn buyer_email(&self) -> Option<String> {
        self.get(Field::BuyerEmail)
    }

    /// Destination address with defaults for anything missing.
    pub fn ship_to(&self) -> Address {
        Address {
            name: self
                .get(Field::ShipName)
                .unwrap_or_else(|| DEFAULT_SHIP_NAME.to_string()),
            phone: self.get(Field::ShipPhone).unwrap_or_default(),
            address_line1: self.get(Field::ShipAddress1).unwrap_or_default(),
            city_locality: self.get(Field::ShipCity).unwrap_or_default(),
            state_province: self.get(Field::ShipState).unwrap_or_default(),
            postal_code: self.get(Field::ShipPostalCode).unwrap_or_default(),
            country_code: self
                .get(Field::ShipCountry)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or_else(|| DEFAULT_SHIP_COUNTRY.to_string()),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
