//! Cart Model

use serde::{Deserialize, Serialize};

/// One cart line: a purchasable item and how many of it.
///
/// The cart holds at most one entry per item ID; adding an already-present
/// item increments its quantity instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// References a menu/catalog item by value, not by live reference
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Always >= 1; reaching 0 removes the entry
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
