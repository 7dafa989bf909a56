//! Menu action history types
//!
//! Every mutating operation on the menu store records exactly one
//! `MenuAction` carrying the pre-mutation snapshots needed to reverse it and
//! the parameters needed to replay it. Payloads are per-variant structs so
//! undo/redo handling stays exhaustively matched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MenuItem, MenuItemUpdate};

/// Price mutation applied by a bulk price update. Exactly one change is
/// honored per call; post-processing (minimum clamp, rounding, zero floor)
/// composes on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum PriceChange {
    /// Set an absolute price
    Set(f64),
    /// Increase by percentage of the current price
    IncreasePercent(f64),
    /// Increase by a fixed amount
    IncreaseFixed(f64),
    /// Decrease by percentage of the current price
    DecreasePercent(f64),
    /// Decrease by a fixed amount
    DecreaseFixed(f64),
}

/// Bulk price update rule: optional change plus post-processing.
///
/// Order of application: change, then minimum-price clamp, then rounding to
/// the nearest `round_to_nearest` step, then floor at 0. The result is
/// stored with 2-decimal precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<PriceChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_to_nearest: Option<f64>,
}

impl PriceRule {
    pub fn set(price: f64) -> Self {
        Self {
            change: Some(PriceChange::Set(price)),
            ..Self::default()
        }
    }

    pub fn increase_percent(value: f64) -> Self {
        Self {
            change: Some(PriceChange::IncreasePercent(value)),
            ..Self::default()
        }
    }

    pub fn decrease_percent(value: f64) -> Self {
        Self {
            change: Some(PriceChange::DecreasePercent(value)),
            ..Self::default()
        }
    }

    pub fn rounded_to(mut self, step: f64) -> Self {
        self.round_to_nearest = Some(step);
        self
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum_price = Some(minimum);
        self
    }
}

/// Availability target for a bulk toggle. `Toggle` flips each item's current
/// value independently, so one call can leave items in different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMode {
    Set(bool),
    Toggle,
}

/// How a bulk description update combines the supplied text with the
/// existing description. Append/prepend join with a single space; the result
/// is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionMode {
    Replace,
    Append,
    Prepend,
}

/// One step of a heterogeneous batch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BulkOperation {
    PriceUpdate {
        ids: Vec<String>,
        rule: PriceRule,
    },
    CategoryChange {
        ids: Vec<String>,
        new_category: String,
    },
    AvailabilityToggle {
        ids: Vec<String>,
        mode: AvailabilityMode,
    },
    DescriptionUpdate {
        ids: Vec<String>,
        mode: DescriptionMode,
        text: String,
    },
    Delete {
        ids: Vec<String>,
    },
}

/// One executed batch step together with the pre-mutation snapshots of the
/// items it touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStep {
    pub operation: BulkOperation,
    pub old_items: Vec<MenuItem>,
}

/// Action payload, one variant per mutation kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuActionKind {
    Add {
        item: MenuItem,
    },
    Update {
        id: String,
        old_item: MenuItem,
        changes: MenuItemUpdate,
    },
    Delete {
        item: MenuItem,
    },
    BulkUpdate {
        ids: Vec<String>,
        old_items: Vec<MenuItem>,
        changes: MenuItemUpdate,
    },
    BulkDelete {
        items: Vec<MenuItem>,
    },
    BulkPriceUpdate {
        ids: Vec<String>,
        old_items: Vec<MenuItem>,
        rule: PriceRule,
    },
    BulkCategoryChange {
        ids: Vec<String>,
        old_items: Vec<MenuItem>,
        new_category: String,
    },
    BulkAvailabilityToggle {
        ids: Vec<String>,
        old_items: Vec<MenuItem>,
        mode: AvailabilityMode,
    },
    BulkDescriptionUpdate {
        ids: Vec<String>,
        old_items: Vec<MenuItem>,
        mode: DescriptionMode,
        text: String,
    },
    BatchOperation {
        steps: Vec<BatchStep>,
    },
}

/// Undo/redo log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAction {
    #[serde(flatten)]
    pub kind: MenuActionKind,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}

impl MenuAction {
    pub fn new(kind: MenuActionKind) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
            batch_id: None,
        }
    }

    pub fn with_batch_id(kind: MenuActionKind, batch_id: String) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
            batch_id: Some(batch_id),
        }
    }
}
