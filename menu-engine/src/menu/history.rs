//! Undo/redo over the bounded action history
//!
//! Undo reverses the most recent action from the snapshots captured in its
//! payload; redo replays the forward effect from the stored parameters
//! (recomputing rule-based updates rather than replaying snapshots). Any
//! new mutation clears the redo stack, keeping the history linear.

use super::MenuStore;
use chrono::Utc;
use shared::models::{BulkOperation, MenuActionKind, MenuItem};

impl MenuStore {
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Reverse the most recent action. No-op when the history is empty.
    pub fn undo(&mut self) {
        let Some(action) = self.undo_stack.pop_back() else {
            return;
        };

        match &action.kind {
            MenuActionKind::Add { item } => {
                let id = item.id.clone();
                self.items.retain(|i| i.id != id);
            }
            MenuActionKind::Delete { item } => {
                self.items.push(item.clone());
            }
            MenuActionKind::Update { old_item, .. } => {
                self.restore_snapshots(std::slice::from_ref(old_item));
            }
            MenuActionKind::BulkDelete { items } => {
                self.items.extend(items.iter().cloned());
            }
            MenuActionKind::BulkUpdate { old_items, .. }
            | MenuActionKind::BulkPriceUpdate { old_items, .. }
            | MenuActionKind::BulkCategoryChange { old_items, .. }
            | MenuActionKind::BulkAvailabilityToggle { old_items, .. }
            | MenuActionKind::BulkDescriptionUpdate { old_items, .. } => {
                self.restore_snapshots(old_items);
            }
            MenuActionKind::BatchOperation { steps } => {
                // reverse each step in reverse order
                for step in steps.iter().rev() {
                    match &step.operation {
                        BulkOperation::Delete { .. } => {
                            self.items.extend(step.old_items.iter().cloned());
                        }
                        _ => self.restore_snapshots(&step.old_items),
                    }
                }
            }
        }

        self.redo_stack.push(action);
        self.persist();
    }

    /// Re-apply the most recently undone action. No-op when nothing has
    /// been undone since the last mutation.
    pub fn redo(&mut self) {
        let Some(action) = self.redo_stack.pop() else {
            return;
        };

        match &action.kind {
            MenuActionKind::Add { item } => {
                self.items.push(item.clone());
            }
            MenuActionKind::Delete { item } => {
                let id = item.id.clone();
                self.items.retain(|i| i.id != id);
            }
            MenuActionKind::Update { id, changes, .. } => {
                if let Some(index) = self.index_of(id) {
                    changes.apply_to(&mut self.items[index]);
                    self.items[index].updated_at = Utc::now();
                }
            }
            MenuActionKind::BulkUpdate { ids, changes, .. } => {
                self.apply_update(ids, changes);
            }
            MenuActionKind::BulkDelete { items } => {
                let ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
                self.items.retain(|i| !ids.contains(&i.id));
            }
            MenuActionKind::BulkPriceUpdate { ids, rule, .. } => {
                // recompute from the rule rather than replaying snapshots
                self.apply_price_update(ids, rule);
            }
            MenuActionKind::BulkCategoryChange {
                ids, new_category, ..
            } => {
                self.apply_category_change(ids, new_category);
            }
            MenuActionKind::BulkAvailabilityToggle { ids, mode, .. } => {
                self.apply_availability_toggle(ids, *mode);
            }
            MenuActionKind::BulkDescriptionUpdate {
                ids, mode, text, ..
            } => {
                self.apply_description_update(ids, *mode, text);
            }
            MenuActionKind::BatchOperation { steps } => {
                // replay each sub-operation's forward effect in order
                for step in steps {
                    self.apply_operation(&step.operation);
                }
            }
        }

        self.undo_stack.push_back(action);
        self.persist();
    }

    /// Swap captured pre-mutation snapshots back in, in place. Snapshots
    /// whose item no longer exists are skipped.
    fn restore_snapshots(&mut self, snapshots: &[MenuItem]) {
        for snapshot in snapshots {
            if let Some(index) = self.index_of(&snapshot.id) {
                self.items[index] = snapshot.clone();
            }
        }
    }
}
