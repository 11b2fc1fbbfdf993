//! Catalog wire types.

use serde::{Deserialize, Serialize};

/// One item of the shop catalog as served by `GET /api/sweets`.
///
/// Quantity is the only field the client ever mutates locally (the optimistic
/// decrement after a purchase); the authoritative copy lives server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl CatalogItem {
    /// True when at least one unit is locally known to be in stock.
    pub fn in_stock(&self) -> bool {
        self.quantity >= 1
    }
}

/// Partial payload for the admin update endpoint (`PUT /api/sweets/{id}`).
///
/// Only set fields are sent; the server keeps the rest unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ItemUpdate {
    /// Update that only replaces the stock level.
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}
