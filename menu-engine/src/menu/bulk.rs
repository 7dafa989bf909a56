//! Bulk mutation operators
//!
//! All bulk operations accept an explicit ID list, capture pre-mutation
//! snapshots of every affected item in a single action, and apply their
//! change uniformly. `execute_batch` chains heterogeneous bulk steps into
//! one undoable batch action with progress reporting.

use super::MenuStore;
use crate::money::{self, to_decimal, to_f64};
use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{
    AvailabilityMode, BatchStep, BulkOperation, DescriptionMode, MenuAction, MenuActionKind,
    MenuItem, MenuItemUpdate, PriceChange, PriceRule,
};
use shared::util;

/// Apply a price rule to a single price: the optional change first, then
/// minimum clamp, rounding, and the zero floor. 2-decimal result.
pub(super) fn apply_price_rule(price: f64, rule: &PriceRule) -> f64 {
    let hundred = Decimal::from(100);
    let mut p = to_decimal(price);

    match rule.change {
        Some(PriceChange::Set(value)) => p = to_decimal(value),
        Some(PriceChange::IncreasePercent(value)) => {
            p *= Decimal::ONE + to_decimal(value) / hundred;
        }
        Some(PriceChange::IncreaseFixed(value)) => p += to_decimal(value),
        Some(PriceChange::DecreasePercent(value)) => {
            p *= Decimal::ONE - to_decimal(value) / hundred;
        }
        Some(PriceChange::DecreaseFixed(value)) => p -= to_decimal(value),
        None => {}
    }

    if let Some(minimum) = rule.minimum_price {
        p = p.max(to_decimal(minimum));
    }
    if let Some(step) = rule.round_to_nearest {
        p = money::round_to_nearest(p, step);
    }
    p = p.max(Decimal::ZERO);

    to_f64(p)
}

impl MenuStore {
    // ==================== Recorded bulk operations ====================

    /// Merge the same field changes into every listed item.
    pub fn bulk_update(&mut self, ids: &[String], changes: MenuItemUpdate) {
        let old_items = self.apply_update(ids, &changes);
        self.record(MenuAction::new(MenuActionKind::BulkUpdate {
            ids: ids.to_vec(),
            old_items,
            changes,
        }));
        self.persist();
    }

    /// Remove every listed item.
    pub fn bulk_delete(&mut self, ids: &[String]) {
        let items = self.apply_delete(ids);
        self.record(MenuAction::new(MenuActionKind::BulkDelete { items }));
        self.persist();
    }

    pub fn bulk_price_update(&mut self, ids: &[String], rule: PriceRule) {
        let old_items = self.apply_price_update(ids, &rule);
        self.record(MenuAction::with_batch_id(
            MenuActionKind::BulkPriceUpdate {
                ids: ids.to_vec(),
                old_items,
                rule,
            },
            util::batch_id(),
        ));
        self.persist();
    }

    pub fn bulk_category_change(&mut self, ids: &[String], new_category: &str) {
        let old_items = self.apply_category_change(ids, new_category);
        self.record(MenuAction::with_batch_id(
            MenuActionKind::BulkCategoryChange {
                ids: ids.to_vec(),
                old_items,
                new_category: new_category.to_string(),
            },
            util::batch_id(),
        ));
        self.persist();
    }

    /// Set or flip availability. `Toggle` flips each item independently, so
    /// one call can leave different items with different values.
    pub fn bulk_availability_toggle(&mut self, ids: &[String], mode: AvailabilityMode) {
        let old_items = self.apply_availability_toggle(ids, mode);
        self.record(MenuAction::with_batch_id(
            MenuActionKind::BulkAvailabilityToggle {
                ids: ids.to_vec(),
                old_items,
                mode,
            },
            util::batch_id(),
        ));
        self.persist();
    }

    pub fn bulk_description_update(&mut self, ids: &[String], mode: DescriptionMode, text: &str) {
        let old_items = self.apply_description_update(ids, mode, text);
        self.record(MenuAction::with_batch_id(
            MenuActionKind::BulkDescriptionUpdate {
                ids: ids.to_vec(),
                old_items,
                mode,
                text: text.to_string(),
            },
            util::batch_id(),
        ));
        self.persist();
    }

    /// Sequentially apply a list of heterogeneous bulk operations as one
    /// undoable batch. `on_progress` is invoked after each step with
    /// (completed, total); steps yield cooperatively between applications
    /// but remain strictly sequential. Runs to completion once started.
    pub async fn execute_batch(
        &mut self,
        operations: Vec<BulkOperation>,
        mut on_progress: impl FnMut(usize, usize),
    ) {
        let total = operations.len();
        let mut steps = Vec::with_capacity(total);

        for (completed, operation) in operations.into_iter().enumerate() {
            let old_items = self.apply_operation(&operation);
            steps.push(BatchStep {
                operation,
                old_items,
            });
            self.persist();

            on_progress(completed + 1, total);
            tokio::task::yield_now().await;
        }

        self.record(MenuAction::with_batch_id(
            MenuActionKind::BatchOperation { steps },
            util::batch_id(),
        ));
        self.persist();
    }

    // ==================== Unrecorded appliers ====================
    //
    // Shared by the recorded operations above and by redo/batch replay,
    // which must re-apply forward effects without touching the history.
    // Each returns the pre-mutation snapshots of the items it touched.

    pub(super) fn apply_operation(&mut self, operation: &BulkOperation) -> Vec<MenuItem> {
        match operation {
            BulkOperation::PriceUpdate { ids, rule } => self.apply_price_update(ids, rule),
            BulkOperation::CategoryChange { ids, new_category } => {
                self.apply_category_change(ids, new_category)
            }
            BulkOperation::AvailabilityToggle { ids, mode } => {
                self.apply_availability_toggle(ids, *mode)
            }
            BulkOperation::DescriptionUpdate { ids, mode, text } => {
                self.apply_description_update(ids, *mode, text)
            }
            BulkOperation::Delete { ids } => self.apply_delete(ids),
        }
    }

    pub(super) fn apply_update(&mut self, ids: &[String], changes: &MenuItemUpdate) -> Vec<MenuItem> {
        self.mutate_listed(ids, |item| {
            changes.apply_to(item);
        })
    }

    pub(super) fn apply_delete(&mut self, ids: &[String]) -> Vec<MenuItem> {
        let removed: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect();
        self.items.retain(|i| !ids.contains(&i.id));
        removed
    }

    pub(super) fn apply_price_update(&mut self, ids: &[String], rule: &PriceRule) -> Vec<MenuItem> {
        self.mutate_listed(ids, |item| {
            item.price = apply_price_rule(item.price, rule);
        })
    }

    pub(super) fn apply_category_change(&mut self, ids: &[String], new_category: &str) -> Vec<MenuItem> {
        self.mutate_listed(ids, |item| {
            item.category = new_category.to_string();
        })
    }

    pub(super) fn apply_availability_toggle(
        &mut self,
        ids: &[String],
        mode: AvailabilityMode,
    ) -> Vec<MenuItem> {
        self.mutate_listed(ids, |item| {
            item.available = match mode {
                AvailabilityMode::Set(value) => value,
                AvailabilityMode::Toggle => !item.available,
            };
        })
    }

    pub(super) fn apply_description_update(
        &mut self,
        ids: &[String],
        mode: DescriptionMode,
        text: &str,
    ) -> Vec<MenuItem> {
        self.mutate_listed(ids, |item| {
            let combined = match mode {
                DescriptionMode::Replace => text.to_string(),
                DescriptionMode::Append => format!("{} {}", item.description, text),
                DescriptionMode::Prepend => format!("{} {}", text, item.description),
            };
            item.description = combined.trim().to_string();
        })
    }

    /// Apply `mutate` to every listed item, refreshing `updated_at`, and
    /// return the pre-mutation snapshots. Unknown IDs are skipped.
    fn mutate_listed(&mut self, ids: &[String], mut mutate: impl FnMut(&mut MenuItem)) -> Vec<MenuItem> {
        let mut old_items = Vec::new();
        for item in &mut self.items {
            if ids.contains(&item.id) {
                old_items.push(item.clone());
                mutate(item);
                item.updated_at = Utc::now();
            }
        }
        old_items
    }
}
