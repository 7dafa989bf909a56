//! Menu item store
//!
//! Authoritative owner of the menu item collection: CRUD, bulk mutation,
//! undo/redo history, import/export, and derived filtered/sorted views.
//!
//! Mutations apply synchronously in memory, record exactly one action in
//! the bounded undo history, and then queue the full collection for a
//! background JSON mirror write. Writes commit strictly in mutation order;
//! persistence failures are logged, never propagated; in-memory state stays
//! the source of truth.

mod bulk;
mod history;
mod query;
mod transfer;


pub use query::{MenuQuery, SortDirection, SortKey, ALL_CATEGORIES};
pub use transfer::{ExportFormat, ImportReport, MergeStrategy};

use crate::config::EngineConfig;
use crate::storage::{self, KvStore};
use chrono::Utc;
use shared::models::{MenuAction, MenuActionKind, MenuItem, MenuItemDraft, MenuItemUpdate};
use shared::util;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

#[derive(Debug, Error)]
pub enum MenuStoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Per-ingredient usage across the whole menu
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IngredientUsage {
    /// Number of menu items referencing the ingredient
    pub count: usize,
    /// Sum of quantities over those references
    pub total_quantity: f64,
}

pub struct MenuStore {
    items: Vec<MenuItem>,
    undo_stack: VecDeque<MenuAction>,
    redo_stack: Vec<MenuAction>,
    storage: Arc<dyn KvStore>,
    storage_key: String,
    /// Queue of the background mirror task; writes commit in queue order.
    writer: tokio::sync::mpsc::UnboundedSender<String>,
    undo_capacity: usize,
    /// Writes are held back until the initial load resolves, so an empty
    /// default never overwrites previously persisted data.
    loaded: bool,
}

impl MenuStore {
    pub fn new(storage: Arc<dyn KvStore>, config: &EngineConfig) -> Self {
        let writer =
            storage::spawn_writer(Arc::clone(&storage), config.menu_storage_key.clone());
        Self {
            items: Vec::new(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            storage,
            storage_key: config.menu_storage_key.clone(),
            writer,
            undo_capacity: config.undo_capacity,
            loaded: false,
        }
    }

    /// Load the persisted collection, seeding sample data when the key has
    /// never been written. Called once at startup; mutations before this
    /// resolves are not persisted.
    pub async fn load(&mut self) {
        match self.storage.read(&self.storage_key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => self.items = items,
                Err(err) => {
                    warn!(%err, "failed to parse persisted menu items, starting empty");
                }
            },
            Ok(None) => {
                debug!("no persisted menu, installing sample items");
                self.items = sample_items();
            }
            Err(err) => {
                warn!(%err, "failed to load menu items");
            }
        }
        self.loaded = true;
        self.persist();
    }

    // ==================== CRUD ====================

    /// Add a new item, assigning a fresh ID, timestamps, and zeroed
    /// popularity/revenue. Returns the new item's ID.
    pub fn add(&mut self, draft: MenuItemDraft) -> Result<String, MenuStoreError> {
        draft
            .validate()
            .map_err(|e| MenuStoreError::Validation(e.to_string()))?;

        let now = Utc::now();
        let item = MenuItem {
            id: util::item_id(),
            name: draft.name,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            available: draft.available,
            image_url: draft.image_url,
            popularity: 0,
            revenue: 0.0,
            created_at: now,
            updated_at: now,
            ingredient_based: draft.ingredient_based,
            ingredients: draft.ingredients,
            allergens: draft.allergens,
            spice_level: draft.spice_level,
            nutrition: draft.nutrition,
        };
        let id = item.id.clone();

        self.record(MenuAction::new(MenuActionKind::Add { item: item.clone() }));
        self.items.push(item);
        self.persist();
        Ok(id)
    }

    /// Merge fields into an existing item. A stale/unknown ID is a silent
    /// no-op by design (single-user app, no transient-race surfacing).
    pub fn update(&mut self, id: &str, changes: MenuItemUpdate) -> Result<(), MenuStoreError> {
        if let Some(price) = changes.price
            && price <= 0.0
        {
            return Err(MenuStoreError::Validation(
                "price must be positive".to_string(),
            ));
        }

        let Some(index) = self.index_of(id) else {
            debug!(id, "update on unknown item, ignoring");
            return Ok(());
        };

        let old_item = self.items[index].clone();
        changes.apply_to(&mut self.items[index]);
        self.items[index].updated_at = Utc::now();

        self.record(MenuAction::new(MenuActionKind::Update {
            id: id.to_string(),
            old_item,
            changes,
        }));
        self.persist();
        Ok(())
    }

    /// Remove an item. A stale/unknown ID is a silent no-op.
    pub fn delete(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            debug!(id, "delete on unknown item, ignoring");
            return;
        };

        let item = self.items.remove(index);
        self.record(MenuAction::new(MenuActionKind::Delete { item }));
        self.persist();
    }

    /// Clone an item under a fresh ID with a "(Copy)" name suffix and reset
    /// counters/timestamps. Recorded as an Add, so it is undoable like any
    /// other creation. Returns the new ID, or None for an unknown source.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let original = self.get(id)?.clone();

        let now = Utc::now();
        let copy = MenuItem {
            id: util::item_id(),
            name: format!("{} (Copy)", original.name),
            popularity: 0,
            revenue: 0.0,
            created_at: now,
            updated_at: now,
            ..original
        };
        let new_id = copy.id.clone();

        self.record(MenuAction::new(MenuActionKind::Add { item: copy.clone() }));
        self.items.push(copy);
        self.persist();
        Some(new_id)
    }

    /// Flip a single item's availability.
    pub fn toggle_availability(&mut self, id: &str) -> Result<(), MenuStoreError> {
        let Some(item) = self.get(id) else {
            return Ok(());
        };
        let next = !item.available;
        self.update(id, MenuItemUpdate::availability(next))
    }

    // ==================== Read helpers ====================

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items_by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn available_items(&self) -> usize {
        self.items.iter().filter(|i| i.available).count()
    }

    pub fn ingredient_based_items(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| i.ingredient_based && !i.ingredients.is_empty())
            .collect()
    }

    pub fn items_by_allergen(&self, allergen: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| i.allergens.iter().any(|a| a == allergen))
            .collect()
    }

    /// Items whose snapshotted spice level lies in `[min, max]`
    /// (unbounded above when `max` is None). Items without a spice level
    /// never match.
    pub fn items_by_spice_level(&self, min: u8, max: Option<u8>) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| match i.spice_level {
                Some(level) => level >= min && max.is_none_or(|m| level <= m),
                None => false,
            })
            .collect()
    }

    pub fn items_with_ingredient(&self, ingredient_id: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| i.ingredients.iter().any(|s| s.ingredient_id == ingredient_id))
            .collect()
    }

    /// Reference count and total quantity per ingredient across the menu.
    pub fn ingredient_usage(&self) -> HashMap<String, IngredientUsage> {
        let mut usage: HashMap<String, IngredientUsage> = HashMap::new();
        for item in &self.items {
            for sel in &item.ingredients {
                let entry = usage.entry(sel.ingredient_id.clone()).or_default();
                entry.count += 1;
                entry.total_quantity += sel.quantity;
            }
        }
        usage
    }

    // ==================== Internals ====================

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Append an action to the bounded undo history and clear the redo
    /// stack (linear history, no branching).
    fn record(&mut self, action: MenuAction) {
        if self.undo_stack.len() >= self.undo_capacity {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(action);
        self.redo_stack.clear();
    }

    /// Queue the collection for a background mirror write. The caller never
    /// waits; the writer task commits queued payloads in order and failures
    /// only warn.
    fn persist(&self) {
        if !self.loaded {
            return;
        }
        match serde_json::to_string(&self.items) {
            Ok(payload) => {
                // send only fails when the writer task is gone, at shutdown
                let _ = self.writer.send(payload);
            }
            Err(err) => warn!(%err, "failed to serialize menu items"),
        }
    }
}

/// Starter menu installed the first time the app runs.
fn sample_items() -> Vec<MenuItem> {
    let now = Utc::now();
    let base = MenuItem {
        id: String::new(),
        name: String::new(),
        price: 0.0,
        description: String::new(),
        category: "Tacos".to_string(),
        available: true,
        image_url: None,
        popularity: 0,
        revenue: 0.0,
        created_at: now,
        updated_at: now,
        ingredient_based: false,
        ingredients: Vec::new(),
        allergens: Vec::new(),
        spice_level: None,
        nutrition: None,
    };

    vec![
        MenuItem {
            id: util::item_id(),
            name: "Al Pastor Taco".to_string(),
            price: 3.50,
            description: "Succulent marinated pork with pineapple".to_string(),
            popularity: 127,
            revenue: 444.50,
            ..base.clone()
        },
        MenuItem {
            id: util::item_id(),
            name: "Carne Asada Taco".to_string(),
            price: 4.00,
            description: "Grilled steak with citrus salsa".to_string(),
            popularity: 98,
            revenue: 392.00,
            ..base.clone()
        },
        MenuItem {
            id: util::item_id(),
            name: "Fish Taco".to_string(),
            price: 4.50,
            description: "Crispy fish with citrus slaw".to_string(),
            available: false,
            popularity: 76,
            revenue: 342.00,
            ..base
        },
    ]
}
