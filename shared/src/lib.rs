//! Shared types for the taqueria menu engine
//!
//! Data models used by the menu engine and any presentation layer sitting
//! on top of it: ingredient reference data, menu items, cart entries, and
//! the action types recorded by the menu store's undo/redo history.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AvailabilityMode, BulkOperation, CartItem, DescriptionMode, DietaryFilter, DietaryInfo,
    Ingredient, IngredientCategory, MenuAction, MenuActionKind, MenuItem, MenuItemDraft,
    MenuItemUpdate, NutritionInfo, PresetCombination, PriceRule, SelectedIngredient,
};
