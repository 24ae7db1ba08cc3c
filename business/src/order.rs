//! Order tracking response types.
//!
//! The endpoint is a third party and its payloads are loosely typed, so every
//! field is optional and mistyped values degrade to `None` instead of failing
//! the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::TrackError;

/// One line item of a pledge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Free-text fulfilment status ("Shipped", "Not Ship", ...).
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sku: Option<String>,
    /// Accepts a JSON number or a numeric string.
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub carrier: Option<String>,
    /// Scheduled delivery estimate.
    #[serde(default, deserialize_with = "lenient_text")]
    pub local_delivery_time: Option<String>,
    /// Revised estimate; wins over `local_delivery_time` when present.
    #[serde(default, deserialize_with = "lenient_text")]
    pub change_delivery_time: Option<String>,
}

impl OrderItem {
    /// Case-insensitive SKU comparison. Items without a SKU never match.
    pub fn matches_sku(&self, sku: &str) -> bool {
        self.sku
            .as_deref()
            .is_some_and(|own| own.trim().to_lowercase() == sku.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderResponse {
    /// Anything but JSON `true` counts as failure.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    /// Machine-readable result code. Numbers are kept as their decimal text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_items")]
    pub data: Vec<OrderItem>,
}

impl OrderResponse {
    /// The line items, or the API's own failure when `success` is false.
    pub fn ensure_success(&self) -> Result<&[OrderItem], TrackError> {
        if self.success {
            Ok(&self.data)
        } else {
            Err(TrackError::Api {
                code: self.code.clone(),
                message: self.message.clone(),
            })
        }
    }

    /// First item whose SKU matches, ignoring case.
    pub fn find_sku(&self, sku: &str) -> Option<&OrderItem> {
        self.data.iter().find(|item| item.matches_sku(sku))
    }
}

/// The decoded response next to the JSON it was read from.
///
/// `raw` is kept for `--json` output, so fields this model doesn't know about
/// still reach the user unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedOrder {
    pub raw: Value,
    pub response: OrderResponse,
}

impl TrackedOrder {
    /// Fails only when `raw` is not shaped like a response object at all.
    pub fn from_json(raw: Value) -> Result<Self, TrackError> {
        let response =
            OrderResponse::deserialize(&raw).map_err(|e| TrackError::Decode(e.to_string()))?;
        Ok(Self { raw, response })
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// A non-array `data` is treated as empty; a non-object item as blank.
fn lenient_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<OrderItem>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .map(|item| OrderItem::deserialize(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
