//! Engine configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MENU_STORAGE_PATH` | `menu.redb` | redb database file |
//! | `MENU_STORAGE_KEY` | `@taco_admin_menu` | persistence key, menu items |
//! | `CART_STORAGE_KEY` | `@taco_app_cart` | persistence key, cart |
//! | `MENU_UNDO_CAPACITY` | `20` | bounded undo history depth |
//! | `MENU_MAX_INGREDIENTS` | `20` | distinct ingredients per composition |

use std::env;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// redb database file used by the default persistence adapter
    pub storage_path: String,
    /// Persistence key for the menu item collection
    pub menu_storage_key: String,
    /// Persistence key for the cart contents
    pub cart_storage_key: String,
    /// Most-recent actions kept for undo; pushing past this evicts the oldest
    pub undo_capacity: usize,
    /// Maximum distinct ingredients per composition
    pub max_ingredients: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_path: "menu.redb".to_string(),
            menu_storage_key: "@taco_admin_menu".to_string(),
            cart_storage_key: "@taco_app_cart".to_string(),
            undo_capacity: 20,
            max_ingredients: 20,
        }
    }
}

impl EngineConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            storage_path: env::var("MENU_STORAGE_PATH").unwrap_or(defaults.storage_path),
            menu_storage_key: env::var("MENU_STORAGE_KEY").unwrap_or(defaults.menu_storage_key),
            cart_storage_key: env::var("CART_STORAGE_KEY").unwrap_or(defaults.cart_storage_key),
            undo_capacity: env_usize("MENU_UNDO_CAPACITY", defaults.undo_capacity),
            max_ingredients: env_usize("MENU_MAX_INGREDIENTS", defaults.max_ingredients),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
