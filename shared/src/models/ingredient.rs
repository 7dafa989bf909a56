//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Ingredient category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Proteins,
    Vegetables,
    Sauces,
    Cheeses,
    Carbs,
    Seasonings,
    Breakfast,
    Extras,
}

/// Dietary flags, independently set (no consistency enforced between them)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryInfo {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub keto: bool,
    pub low_carb: bool,
}

/// Dietary filter: each `true` flag must be set on a matching ingredient.
/// `false`/unset flags are not constrained.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryFilter {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub keto: bool,
    pub low_carb: bool,
}

/// Ingredient entity — catalog reference data, never mutated at runtime.
///
/// Quantity bounds satisfy `min_quantity <= default_quantity <= max_quantity`;
/// `increment` is the step size for quantity adjustments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: IngredientCategory,
    /// Cost per unit, in currency units (>= 0)
    pub base_cost: f64,
    /// Unit label: "oz", "piece", "strip", "pinch", ...
    pub unit: String,
    pub default_quantity: f64,
    pub min_quantity: f64,
    pub max_quantity: f64,
    pub increment: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub dietary: DietaryInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub availability: bool,
    pub popular: bool,
    /// 0-5 scale; absent means the ingredient contributes no heat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
}

/// One (ingredient, quantity) entry of a composition.
///
/// A composition holds at most one entry per ingredient ID; re-setting a
/// quantity replaces the entry rather than appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedIngredient {
    pub ingredient_id: String,
    pub quantity: f64,
}

impl SelectedIngredient {
    pub fn new(ingredient_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
        }
    }
}

/// Preset combination — a named, catalog-defined composition.
///
/// `base_price` is informational only; the composition engine derives the
/// authoritative price from ingredient costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetCombination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub ingredients: Vec<SelectedIngredient>,
    pub base_price: f64,
    pub popular: bool,
}
