//! Ingredient catalog
//!
//! Static reference data: ingredient definitions and preset combinations,
//! defined at build time and never mutated. All other components read this
//! catalog through lookups; derivation logic lives in [`crate::composition`].

mod data;

use shared::models::{DietaryFilter, Ingredient, IngredientCategory, PresetCombination};
use std::collections::HashMap;

pub struct IngredientCatalog {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
    presets: Vec<PresetCombination>,
}

impl IngredientCatalog {
    /// The built-in taqueria catalog.
    pub fn builtin() -> Self {
        Self::new(data::ingredients(), data::preset_combinations())
    }

    pub fn new(ingredients: Vec<Ingredient>, presets: Vec<PresetCombination>) -> Self {
        let index = ingredients
            .iter()
            .enumerate()
            .map(|(i, ing)| (ing.id.clone(), i))
            .collect();
        Self {
            ingredients,
            index,
            presets,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.index.get(id).map(|&i| &self.ingredients[i])
    }

    pub fn all(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn by_category(&self, category: IngredientCategory) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn available(&self) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.availability).collect()
    }

    pub fn popular(&self) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.popular).collect()
    }

    /// Ingredients satisfying every `true` flag of the filter.
    pub fn matching(&self, filter: &DietaryFilter) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| {
                let d = &i.dietary;
                (!filter.vegetarian || d.vegetarian)
                    && (!filter.vegan || d.vegan)
                    && (!filter.gluten_free || d.gluten_free)
                    && (!filter.dairy_free || d.dairy_free)
                    && (!filter.keto || d.keto)
                    && (!filter.low_carb || d.low_carb)
            })
            .collect()
    }

    pub fn presets(&self) -> &[PresetCombination] {
        &self.presets
    }

    pub fn preset(&self, id: &str) -> Option<&PresetCombination> {
        self.presets.iter().find(|p| p.id == id)
    }
}

impl Default for IngredientCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_quantity_bounds_are_consistent() {
        let catalog = IngredientCatalog::builtin();
        for ing in catalog.all() {
            assert!(ing.base_cost >= 0.0, "{}: negative cost", ing.id);
            assert!(ing.increment > 0.0, "{}: zero increment", ing.id);
            assert!(
                ing.min_quantity <= ing.default_quantity
                    && ing.default_quantity <= ing.max_quantity,
                "{}: min <= default <= max violated",
                ing.id
            );
        }
    }

    #[test]
    fn builtin_preset_references_resolve() {
        let catalog = IngredientCatalog::builtin();
        for preset in catalog.presets() {
            for sel in &preset.ingredients {
                let ing = catalog
                    .get(&sel.ingredient_id)
                    .unwrap_or_else(|| panic!("{}: unknown {}", preset.id, sel.ingredient_id));
                assert!(
                    sel.quantity >= ing.min_quantity && sel.quantity <= ing.max_quantity,
                    "{}: {} quantity out of bounds",
                    preset.id,
                    sel.ingredient_id
                );
            }
        }
    }

    #[test]
    fn lookup_by_id_and_category() {
        let catalog = IngredientCatalog::builtin();
        let bacon = catalog.get("bacon").unwrap();
        assert_eq!(bacon.category, IngredientCategory::Proteins);
        assert!(catalog.get("nonexistent").is_none());

        let cheeses = catalog.by_category(IngredientCategory::Cheeses);
        assert!(cheeses.iter().all(|i| i.allergens.contains(&"dairy".to_string())));
        assert!(!cheeses.is_empty());
    }

    #[test]
    fn dietary_filter_requires_all_true_flags() {
        let catalog = IngredientCatalog::builtin();
        let vegan = catalog.matching(&DietaryFilter {
            vegan: true,
            ..DietaryFilter::default()
        });
        assert!(vegan.iter().all(|i| i.dietary.vegan));
        assert!(vegan.iter().any(|i| i.id == "avocado"));
        assert!(!vegan.iter().any(|i| i.id == "bacon"));
    }
}
