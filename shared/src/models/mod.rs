//! Data models
//!
//! Shared between the menu engine and the presentation layer. All IDs are
//! strings (time-derived for menu items, catalog-defined for ingredients).

pub mod action;
pub mod cart;
pub mod ingredient;
pub mod menu_item;

// Re-exports
pub use action::*;
pub use cart::*;
pub use ingredient::*;
pub use menu_item::*;
