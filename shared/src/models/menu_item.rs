//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SelectedIngredient;

/// Optional nutrition facts for a menu item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// Menu item entity
///
/// Created via add or duplicate, mutated via update/bulk operations, removed
/// via delete; every mutation passes through the store's action history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Time-derived string ID, assigned at creation, never reused
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Free-form category label ("Tacos", "Breakfast", ...)
    pub category: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Order counter, starts at 0
    #[serde(default)]
    pub popularity: i64,
    /// Revenue accumulator, starts at 0
    #[serde(default)]
    pub revenue: f64,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,

    // -- Ingredient-composition sub-record (custom-built items only) --
    #[serde(default)]
    pub ingredient_based: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<SelectedIngredient>,
    /// Allergen set derived from ingredients, snapshotted at save time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
    /// Spice level derived from ingredients, snapshotted at save time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
}

/// Create payload — everything the store does not assign itself.
///
/// The store fills in id, timestamps, and zeroed popularity/revenue.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default = "default_true")]
    pub available: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredient_based: bool,
    #[serde(default)]
    pub ingredients: Vec<SelectedIngredient>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub spice_level: Option<u8>,
    pub nutrition: Option<NutritionInfo>,
}

fn default_true() -> bool {
    true
}

impl MenuItemDraft {
    /// Minimal draft used by tests and quick item entry.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
            available: true,
            image_url: None,
            ingredient_based: false,
            ingredients: Vec::new(),
            allergens: Vec::new(),
            spice_level: None,
            nutrition: None,
        }
    }
}

/// Update payload — `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub image_url: Option<String>,
    pub ingredient_based: Option<bool>,
    pub ingredients: Option<Vec<SelectedIngredient>>,
    pub allergens: Option<Vec<String>>,
    pub spice_level: Option<u8>,
    pub nutrition: Option<NutritionInfo>,
}

impl MenuItemUpdate {
    /// Merge this update into `item`, leaving `None` fields untouched.
    /// Does not refresh `updated_at`; the store does that.
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(image_url) = &self.image_url {
            item.image_url = Some(image_url.clone());
        }
        if let Some(ingredient_based) = self.ingredient_based {
            item.ingredient_based = ingredient_based;
        }
        if let Some(ingredients) = &self.ingredients {
            item.ingredients = ingredients.clone();
        }
        if let Some(allergens) = &self.allergens {
            item.allergens = allergens.clone();
        }
        if let Some(spice_level) = self.spice_level {
            item.spice_level = Some(spice_level);
        }
        if let Some(nutrition) = &self.nutrition {
            item.nutrition = Some(nutrition.clone());
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}
