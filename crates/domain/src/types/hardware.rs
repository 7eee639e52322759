//! Hardware inventory entities

use serde::{Deserialize, Serialize};

/// One inventory item.
///
/// Monetary fields stay decimal-formatted strings end to end; parsing
/// them to floating point would introduce rounding drift on re-encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub id: i64,
    /// Unique secondary identity, used for physical lookup.
    pub barcode: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Decoded hardware listing. Server order is preserved; `total` falls
/// back to the item count when the wrapper omits it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HardwarePage {
    pub items: Vec<HardwareItem>,
    pub total: usize,
}

/// Creation payload for `POST /api/v1/hardware`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHardware {
    pub barcode: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<String>,
}

/// Partial update for `PATCH /api/v1/hardware/{id}`. Absent fields are
/// left unchanged by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwarePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<String>,
}

/// Which way a stock adjustment moves inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    /// Goods received into stock.
    Receive,
    /// Goods consumed (sold or installed).
    Consume,
}

impl StockDirection {
    /// Endpoint path segment for the adjustment.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Receive => "receive",
            Self::Consume => "use",
        }
    }
}

/// Body for the stock adjustment endpoints, keyed by barcode so shop
/// staff can scan straight off the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub barcode: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
