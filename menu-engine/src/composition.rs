//! Ingredient composition engine
//!
//! Pure derivation from a composition (set of ingredient selections) to
//! cost, suggested price, allergen set, and spice level, plus the quantity
//! mutation rules (clamping, removal at zero, capacity enforcement).
//!
//! Unknown ingredient IDs contribute nothing to derivations and are
//! silently skipped; the catalog is the single source of ingredient truth.

use crate::catalog::IngredientCatalog;
use crate::money::{self, to_decimal, to_f64};
use shared::models::{PresetCombination, SelectedIngredient};
use std::collections::BTreeSet;
use thiserror::Error;

/// Default maximum distinct ingredients per composition
pub const DEFAULT_MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("maximum of {limit} ingredients reached")]
    CapacityExceeded { limit: usize },

    #[error("preset '{id}' has {count} ingredients, limit is {limit}")]
    PresetTooLarge {
        id: String,
        count: usize,
        limit: usize,
    },
}

/// A draft custom item: at most one entry per ingredient ID, order
/// irrelevant for all derivations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    entries: Vec<SelectedIngredient>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SelectedIngredient] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<SelectedIngredient> {
        self.entries
    }

    /// Current quantity of an ingredient, 0 when not selected.
    pub fn quantity_of(&self, ingredient_id: &str) -> f64 {
        self.entries
            .iter()
            .find(|e| e.ingredient_id == ingredient_id)
            .map(|e| e.quantity)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn remove(&mut self, ingredient_id: &str) {
        self.entries.retain(|e| e.ingredient_id != ingredient_id);
    }
}

/// Composition engine bound to a catalog.
pub struct Composer<'a> {
    catalog: &'a IngredientCatalog,
    max_ingredients: usize,
}

impl<'a> Composer<'a> {
    pub fn new(catalog: &'a IngredientCatalog) -> Self {
        Self::with_limit(catalog, DEFAULT_MAX_INGREDIENTS)
    }

    pub fn with_limit(catalog: &'a IngredientCatalog, max_ingredients: usize) -> Self {
        Self {
            catalog,
            max_ingredients,
        }
    }

    /// Total ingredient cost: sum of `base_cost * quantity` over all
    /// resolvable entries.
    pub fn cost(&self, composition: &Composition) -> f64 {
        let total = composition
            .entries
            .iter()
            .filter_map(|sel| {
                self.catalog
                    .get(&sel.ingredient_id)
                    .map(|ing| to_decimal(ing.base_cost) * to_decimal(sel.quantity))
            })
            .sum();
        to_f64(total)
    }

    /// Markup-adjusted sale price for the composition's current cost.
    pub fn suggested_price(&self, composition: &Composition) -> f64 {
        money::suggested_price(self.cost(composition))
    }

    /// De-duplicated union of the referenced ingredients' allergens.
    pub fn allergens(&self, composition: &Composition) -> Vec<String> {
        let set: BTreeSet<String> = composition
            .entries
            .iter()
            .filter_map(|sel| self.catalog.get(&sel.ingredient_id))
            .flat_map(|ing| ing.allergens.iter().cloned())
            .collect();
        set.into_iter().collect()
    }

    /// Highest spice level among referenced ingredients (max, not sum);
    /// 0 when nothing carries a spice level.
    pub fn spice_level(&self, composition: &Composition) -> u8 {
        composition
            .entries
            .iter()
            .filter_map(|sel| self.catalog.get(&sel.ingredient_id))
            .filter_map(|ing| ing.spice_level)
            .max()
            .unwrap_or(0)
    }

    /// Set an ingredient's quantity.
    ///
    /// Requests at or below 0 remove the entry. Anything else is clamped
    /// into the ingredient's [min, max] and inserted or replaced, never
    /// duplicated. Inserting a new distinct ingredient past the capacity
    /// limit is rejected and leaves the composition unchanged. Unknown
    /// ingredient IDs are a silent no-op.
    pub fn set_quantity(
        &self,
        composition: &mut Composition,
        ingredient_id: &str,
        requested: f64,
    ) -> Result<(), CompositionError> {
        let Some(ingredient) = self.catalog.get(ingredient_id) else {
            tracing::debug!(ingredient_id, "set_quantity on unknown ingredient, ignoring");
            return Ok(());
        };

        if requested <= 0.0 {
            composition.remove(ingredient_id);
            return Ok(());
        }

        let clamped = requested.clamp(ingredient.min_quantity, ingredient.max_quantity);

        if let Some(entry) = composition
            .entries
            .iter_mut()
            .find(|e| e.ingredient_id == ingredient_id)
        {
            entry.quantity = clamped;
            return Ok(());
        }

        if composition.len() >= self.max_ingredients {
            return Err(CompositionError::CapacityExceeded {
                limit: self.max_ingredients,
            });
        }

        composition
            .entries
            .push(SelectedIngredient::new(ingredient_id, clamped));
        Ok(())
    }

    /// Raise an ingredient's quantity by its increment step. No-op when the
    /// step would exceed the ingredient's maximum.
    pub fn increment(
        &self,
        composition: &mut Composition,
        ingredient_id: &str,
    ) -> Result<(), CompositionError> {
        let Some(ingredient) = self.catalog.get(ingredient_id) else {
            return Ok(());
        };

        let next = composition.quantity_of(ingredient_id) + ingredient.increment;
        if next > ingredient.max_quantity {
            return Ok(());
        }
        self.set_quantity(composition, ingredient_id, next)
    }

    /// Lower an ingredient's quantity by its increment step; reaching 0
    /// removes the entry. No-op when the step would go below 0.
    pub fn decrement(
        &self,
        composition: &mut Composition,
        ingredient_id: &str,
    ) -> Result<(), CompositionError> {
        let Some(ingredient) = self.catalog.get(ingredient_id) else {
            return Ok(());
        };

        let next = composition.quantity_of(ingredient_id) - ingredient.increment;
        if next < 0.0 {
            return Ok(());
        }
        self.set_quantity(composition, ingredient_id, next)
    }

    /// Replace the composition wholesale with a preset's ingredient list.
    pub fn apply_preset(
        &self,
        composition: &mut Composition,
        preset: &PresetCombination,
    ) -> Result<(), CompositionError> {
        if preset.ingredients.len() > self.max_ingredients {
            return Err(CompositionError::PresetTooLarge {
                id: preset.id.clone(),
                count: preset.ingredients.len(),
                limit: self.max_ingredients,
            });
        }
        composition.entries = preset.ingredients.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::builtin()
    }

    #[test]
    fn cost_is_additive() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "bacon", 2.0).unwrap();
        let with_bacon = composer.cost(&composition);
        assert_eq!(with_bacon, 1.50); // 0.75 * 2

        composer
            .set_quantity(&mut composition, "cheese-cheddar", 1.0)
            .unwrap();
        let with_cheese = composer.cost(&composition);
        assert_eq!(with_cheese, 2.05);
        assert!(with_cheese > with_bacon);

        composer.set_quantity(&mut composition, "bacon", 0.0).unwrap();
        assert!(composer.cost(&composition) < with_cheese);
    }

    #[test]
    fn set_quantity_clamps_to_ingredient_bounds() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        // bacon: min 1, max 6
        composer.set_quantity(&mut composition, "bacon", 99.0).unwrap();
        assert_eq!(composition.quantity_of("bacon"), 6.0);

        composer.set_quantity(&mut composition, "bacon", 0.25).unwrap();
        assert_eq!(composition.quantity_of("bacon"), 1.0);
    }

    #[test]
    fn zero_quantity_removes_entry() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "bacon", 2.0).unwrap();
        composer.set_quantity(&mut composition, "bacon", 0.0).unwrap();
        assert!(composition.is_empty());
    }

    #[test]
    fn resetting_quantity_never_duplicates() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "bacon", 2.0).unwrap();
        composer.set_quantity(&mut composition, "bacon", 3.0).unwrap();
        assert_eq!(composition.len(), 1);
        assert_eq!(composition.quantity_of("bacon"), 3.0);
    }

    #[test]
    fn capacity_rejects_new_but_allows_updates() {
        let catalog = catalog();
        let composer = Composer::with_limit(&catalog, 2);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "bacon", 2.0).unwrap();
        composer.set_quantity(&mut composition, "lettuce", 1.0).unwrap();

        let err = composer
            .set_quantity(&mut composition, "tomatoes", 1.0)
            .unwrap_err();
        assert_eq!(err, CompositionError::CapacityExceeded { limit: 2 });
        assert_eq!(composition.len(), 2);

        // updating an already-present ingredient is always allowed
        composer.set_quantity(&mut composition, "bacon", 4.0).unwrap();
        assert_eq!(composition.quantity_of("bacon"), 4.0);
    }

    #[test]
    fn unknown_ingredient_is_silently_ignored() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer
            .set_quantity(&mut composition, "unobtainium", 3.0)
            .unwrap();
        assert!(composition.is_empty());

        // unknown IDs inside an existing composition contribute nothing
        composition
            .entries
            .push(SelectedIngredient::new("unobtainium", 3.0));
        assert_eq!(composer.cost(&composition), 0.0);
        assert!(composer.allergens(&composition).is_empty());
        assert_eq!(composer.spice_level(&composition), 0);
    }

    #[test]
    fn increment_steps_and_stops_at_max() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        // chorizo: min 1, max 4, step 0.5
        composer.set_quantity(&mut composition, "chorizo", 3.5).unwrap();
        composer.increment(&mut composition, "chorizo").unwrap();
        assert_eq!(composition.quantity_of("chorizo"), 4.0);

        // at max: stepping again is a no-op, not a wrap or clamp error
        composer.increment(&mut composition, "chorizo").unwrap();
        assert_eq!(composition.quantity_of("chorizo"), 4.0);
    }

    #[test]
    fn decrement_removes_at_zero_and_rejects_below() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        // bacon: step 1
        composer.set_quantity(&mut composition, "bacon", 1.0).unwrap();
        composer.decrement(&mut composition, "bacon").unwrap();
        assert!(composition.is_empty());

        // not selected: current 0, step below 0 is rejected
        composer.decrement(&mut composition, "bacon").unwrap();
        assert!(composition.is_empty());
    }

    #[test]
    fn allergens_union_is_order_insensitive() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "shrimp", 4.0).unwrap();
        composer
            .set_quantity(&mut composition, "cheese-cheddar", 1.0)
            .unwrap();

        let mut allergens = composer.allergens(&composition);
        allergens.sort();
        assert_eq!(allergens, vec!["dairy".to_string(), "shellfish".to_string()]);
    }

    #[test]
    fn spice_level_is_max_not_sum() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer
            .set_quantity(&mut composition, "peppers-jalapeno", 0.5)
            .unwrap(); // spice 3
        composer
            .set_quantity(&mut composition, "salsa-hot", 0.5)
            .unwrap(); // spice 4
        composer.set_quantity(&mut composition, "salt", 2.0).unwrap(); // no spice

        assert_eq!(composer.spice_level(&composition), 4);
    }

    #[test]
    fn preset_replaces_composition_wholesale() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "radish", 0.5).unwrap();

        let preset = catalog.preset("al-pastor-classic").unwrap();
        composer.apply_preset(&mut composition, preset).unwrap();
        assert_eq!(composition.len(), preset.ingredients.len());
        assert_eq!(composition.quantity_of("radish"), 0.0);
        assert_eq!(composition.quantity_of("al-pastor"), 3.0);
    }

    #[test]
    fn oversized_preset_is_rejected() {
        let catalog = catalog();
        let composer = Composer::with_limit(&catalog, 3);
        let mut composition = Composition::new();

        let preset = catalog.preset("carnitas-supreme").unwrap();
        assert!(preset.ingredients.len() > 3);

        let err = composer.apply_preset(&mut composition, preset).unwrap_err();
        assert!(matches!(err, CompositionError::PresetTooLarge { .. }));
        assert!(composition.is_empty());
    }

    #[test]
    fn suggested_price_example() {
        let catalog = catalog();
        let composer = Composer::new(&catalog);
        let mut composition = Composition::new();

        composer.set_quantity(&mut composition, "chorizo", 2.0).unwrap();
        let cost = composer.cost(&composition);
        assert_eq!(cost, 1.70);
        // raw = 1.70 * 2.2 = 3.74 -> next $0.05 multiple is 3.75
        assert_eq!(composer.suggested_price(&composition), 3.75);
    }
}
