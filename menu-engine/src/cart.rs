//! Cart store
//!
//! Session-scoped selection of purchasable items with quantities,
//! independent of the menu store. Same persistence discipline: load once
//! at startup, queue an in-order mirror write after every mutation, first
//! write deferred until the initial load resolves.

use crate::config::EngineConfig;
use crate::money::{to_decimal, to_f64};
use crate::storage::{self, KvStore};
use shared::models::CartItem;
use std::sync::Arc;
use tracing::warn;

pub struct CartStore {
    items: Vec<CartItem>,
    storage: Arc<dyn KvStore>,
    storage_key: String,
    writer: tokio::sync::mpsc::UnboundedSender<String>,
    loaded: bool,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KvStore>, config: &EngineConfig) -> Self {
        let writer =
            storage::spawn_writer(Arc::clone(&storage), config.cart_storage_key.clone());
        Self {
            items: Vec::new(),
            storage,
            storage_key: config.cart_storage_key.clone(),
            writer,
            loaded: false,
        }
    }

    /// Load the persisted cart. Called once at startup.
    pub async fn load(&mut self) {
        match self.storage.read(&self.storage_key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => self.items = items,
                Err(err) => warn!(%err, "failed to parse persisted cart, starting empty"),
            },
            Ok(None) => {}
            Err(err) => warn!(%err, "failed to load cart"),
        }
        self.loaded = true;
    }

    /// Add one of an item: increments the quantity when the ID is already
    /// in the cart, otherwise inserts a new entry with quantity 1.
    pub fn add(&mut self, id: &str, name: &str, price: f64) {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(entry) => entry.quantity += 1,
            None => self.items.push(CartItem {
                id: id.to_string(),
                name: name.to_string(),
                price,
                quantity: 1,
            }),
        }
        self.persist();
    }

    /// Remove an entry; no error if absent.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
        self.persist();
    }

    /// Set an entry's quantity exactly (cart quantities are not subject to
    /// catalog min/max rules); 0 or less removes the entry.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(entry) = self.items.iter_mut().find(|i| i.id == id) {
            entry.quantity = quantity.min(i64::from(u32::MAX)) as u32;
        }
        self.persist();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all entries.
    pub fn total_price(&self) -> f64 {
        let total = self
            .items
            .iter()
            .map(|i| to_decimal(i.price) * rust_decimal::Decimal::from(i.quantity))
            .sum();
        to_f64(total)
    }

    fn persist(&self) {
        if !self.loaded {
            return;
        }
        match serde_json::to_string(&self.items) {
            Ok(payload) => {
                let _ = self.writer.send(payload);
            }
            Err(err) => warn!(%err, "failed to serialize cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    async fn cart() -> CartStore {
        let mut store = CartStore::new(Arc::new(MemoryStore::new()), &EngineConfig::default());
        store.load().await;
        store
    }

    #[tokio::test]
    async fn add_twice_increments_instead_of_duplicating() {
        let mut cart = cart().await;
        cart.add("1", "Al Pastor Taco", 3.50);
        cart.add("1", "Al Pastor Taco", 3.50);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_price(), 7.00);
    }

    #[tokio::test]
    async fn set_quantity_zero_removes_entry() {
        let mut cart = cart().await;
        cart.add("1", "Al Pastor Taco", 3.50);
        cart.set_quantity("1", 0);
        assert!(cart.is_empty());

        // negative behaves the same
        cart.add("2", "Fish Taco", 4.50);
        cart.set_quantity("2", -3);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn set_quantity_is_exact_without_clamping() {
        let mut cart = cart().await;
        cart.add("1", "Al Pastor Taco", 3.50);
        cart.set_quantity("1", 40);
        assert_eq!(cart.items()[0].quantity, 40);
        assert_eq!(cart.total_price(), 140.00);

        // requests beyond u32 saturate instead of wrapping
        cart.set_quantity("1", i64::from(u32::MAX) + 5);
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let mut cart = cart().await;
        cart.add("1", "Al Pastor Taco", 3.50);
        cart.add("2", "Fish Taco", 4.50);

        cart.remove("missing"); // no error
        cart.remove("1");
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0.0);
    }

    #[tokio::test]
    async fn cart_round_trips_through_storage() {
        let storage = Arc::new(MemoryStore::new());
        let config = EngineConfig::default();

        {
            let mut cart = CartStore::new(storage.clone(), &config);
            cart.load().await;
            cart.add("1", "Al Pastor Taco", 3.50);
            cart.add("1", "Al Pastor Taco", 3.50);
            cart.add("2", "Fish Taco", 4.50);
            // let the spawned write land
            tokio::task::yield_now().await;
        }

        let mut restored = CartStore::new(storage, &config);
        restored.load().await;
        assert_eq!(restored.items().len(), 2);
        assert_eq!(restored.total_price(), 11.50);
    }
}
