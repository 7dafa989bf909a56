//! Built-in taqueria ingredient database and preset combinations

use shared::models::{
    DietaryInfo, Ingredient, IngredientCategory, PresetCombination, SelectedIngredient,
};
use IngredientCategory::*;

// Dietary profiles shared by most entries.

/// Meat: no dietary restriction flags besides gluten/dairy free and keto
fn meat() -> DietaryInfo {
    DietaryInfo {
        vegetarian: false,
        vegan: false,
        gluten_free: true,
        dairy_free: true,
        keto: true,
        low_carb: true,
    }
}

/// Low-carb plant food (vegetables, salsas)
fn plant() -> DietaryInfo {
    DietaryInfo {
        vegetarian: true,
        vegan: true,
        gluten_free: true,
        dairy_free: true,
        keto: true,
        low_carb: true,
    }
}

/// Starchy plant food (beans, rice, corn tortillas)
fn plant_carb() -> DietaryInfo {
    DietaryInfo {
        keto: false,
        low_carb: false,
        ..plant()
    }
}

/// Dairy products
fn dairy() -> DietaryInfo {
    DietaryInfo {
        vegan: false,
        dairy_free: false,
        ..plant()
    }
}

/// Eggs: vegetarian but not vegan
fn egg() -> DietaryInfo {
    DietaryInfo {
        vegan: false,
        ..plant()
    }
}

#[allow(clippy::too_many_arguments)]
fn ing(
    id: &str,
    name: &str,
    category: IngredientCategory,
    base_cost: f64,
    unit: &str,
    (default_quantity, min_quantity, max_quantity, increment): (f64, f64, f64, f64),
    dietary: DietaryInfo,
    description: &str,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        category,
        base_cost,
        unit: unit.to_string(),
        default_quantity,
        min_quantity,
        max_quantity,
        increment,
        allergens: Vec::new(),
        dietary,
        description: Some(description.to_string()),
        availability: true,
        popular: true,
        spice_level: None,
    }
}

fn allergens(mut i: Ingredient, list: &[&str]) -> Ingredient {
    i.allergens = list.iter().map(|a| a.to_string()).collect();
    i
}

fn spiced(mut i: Ingredient, level: u8) -> Ingredient {
    i.spice_level = Some(level);
    i
}

fn niche(mut i: Ingredient) -> Ingredient {
    i.popular = false;
    i
}

pub(super) fn ingredients() -> Vec<Ingredient> {
    let flour = DietaryInfo {
        gluten_free: false,
        keto: false,
        low_carb: false,
        ..plant()
    };

    vec![
        // Proteins
        ing("bacon", "Bacon", Proteins, 0.75, "strip", (2.0, 1.0, 6.0, 1.0), meat(),
            "Crispy smoked bacon strips"),
        spiced(ing("chorizo", "Chorizo", Proteins, 0.85, "oz", (2.0, 1.0, 4.0, 0.5), meat(),
            "Spicy Mexican sausage"), 3),
        ing("carnitas", "Carnitas", Proteins, 1.25, "oz", (3.0, 1.0, 6.0, 0.5), meat(),
            "Slow-cooked pulled pork"),
        ing("carne-asada", "Carne Asada", Proteins, 1.50, "oz", (3.0, 1.0, 6.0, 0.5), meat(),
            "Grilled marinated steak"),
        spiced(ing("al-pastor", "Al Pastor", Proteins, 1.35, "oz", (3.0, 1.0, 6.0, 0.5), meat(),
            "Marinated pork with pineapple"), 2),
        ing("chicken", "Grilled Chicken", Proteins, 1.15, "oz", (3.0, 1.0, 6.0, 0.5), meat(),
            "Seasoned grilled chicken breast"),
        niche(allergens(ing("fish", "Fish (Mahi)", Proteins, 1.75, "oz", (3.0, 1.0, 5.0, 0.5),
            meat(), "Grilled or fried mahi mahi"), &["fish"])),
        niche(allergens(ing("shrimp", "Shrimp", Proteins, 2.25, "piece", (4.0, 2.0, 8.0, 1.0),
            meat(), "Grilled or sautéed shrimp"), &["shellfish"])),
        ing("beans-black", "Black Beans", Proteins, 0.35, "oz", (2.0, 1.0, 4.0, 0.5), plant_carb(),
            "Seasoned black beans"),
        ing("beans-refried", "Refried Beans", Proteins, 0.40, "oz", (2.0, 1.0, 4.0, 0.5),
            plant_carb(), "Creamy refried beans"),
        // Breakfast
        allergens(ing("eggs-scrambled", "Scrambled Eggs", Breakfast, 0.65, "egg",
            (2.0, 1.0, 4.0, 1.0), egg(), "Fresh scrambled eggs"), &["eggs"]),
        ing("sausage", "Breakfast Sausage", Breakfast, 0.95, "patty", (1.0, 1.0, 3.0, 1.0), meat(),
            "Seasoned breakfast sausage patty"),
        ing("hash-browns", "Hash Browns", Breakfast, 0.45, "oz", (2.0, 1.0, 4.0, 0.5), plant_carb(),
            "Crispy shredded potato hash browns"),
        // Vegetables
        ing("onions-white", "White Onions", Vegetables, 0.15, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Diced white onions"),
        ing("onions-red", "Red Onions", Vegetables, 0.20, "oz", (0.75, 0.25, 2.0, 0.25), plant(),
            "Diced red onions"),
        ing("peppers-bell", "Bell Peppers", Vegetables, 0.25, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Fresh bell pepper strips"),
        spiced(ing("peppers-jalapeno", "Jalapeños", Vegetables, 0.30, "oz", (0.5, 0.25, 2.0, 0.25),
            plant(), "Fresh sliced jalapeños"), 3),
        niche(spiced(ing("peppers-serrano", "Serrano Peppers", Vegetables, 0.40, "oz",
            (0.25, 0.125, 1.0, 0.125), plant(), "Fresh diced serrano peppers"), 4)),
        ing("tomatoes", "Tomatoes", Vegetables, 0.35, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Fresh diced tomatoes"),
        ing("lettuce", "Lettuce", Vegetables, 0.20, "oz", (0.5, 0.25, 2.0, 0.25), plant(),
            "Fresh shredded lettuce"),
        ing("cilantro", "Cilantro", Vegetables, 0.25, "oz", (0.25, 0.125, 1.0, 0.125), plant(),
            "Fresh chopped cilantro"),
        ing("avocado", "Avocado", Vegetables, 0.75, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Fresh sliced avocado"),
        niche(ing("pineapple", "Pineapple", Vegetables, 0.45, "oz", (0.75, 0.5, 2.0, 0.25),
            plant_carb(), "Fresh diced pineapple")),
        // Cheeses
        allergens(ing("cheese-cheddar", "Cheddar Cheese", Cheeses, 0.55, "oz", (1.0, 0.5, 3.0, 0.25),
            dairy(), "Shredded sharp cheddar"), &["dairy"]),
        allergens(ing("cheese-mexican", "Mexican Cheese Blend", Cheeses, 0.50, "oz",
            (1.0, 0.5, 3.0, 0.25), dairy(), "Traditional Mexican cheese blend"), &["dairy"]),
        niche(allergens(ing("cheese-queso-fresco", "Queso Fresco", Cheeses, 0.65, "oz",
            (0.75, 0.5, 2.0, 0.25), dairy(), "Fresh Mexican cheese"), &["dairy"])),
        spiced(allergens(ing("cheese-pepper-jack", "Pepper Jack", Cheeses, 0.60, "oz",
            (1.0, 0.5, 2.5, 0.25), dairy(), "Spicy pepper jack cheese"), &["dairy"]), 2),
        // Carbs
        allergens(ing("tortilla-flour-small", "Small Flour Tortilla", Carbs, 0.25, "piece",
            (1.0, 1.0, 3.0, 1.0), flour, "6\" soft flour tortilla"), &["gluten"]),
        allergens(ing("tortilla-flour-large", "Large Flour Tortilla", Carbs, 0.45, "piece",
            (1.0, 1.0, 2.0, 1.0), flour, "10\" soft flour tortilla"), &["gluten"]),
        ing("tortilla-corn", "Corn Tortilla", Carbs, 0.20, "piece", (2.0, 1.0, 4.0, 1.0),
            plant_carb(), "Traditional corn tortilla"),
        niche(ing("tostada-shell", "Tostada Shell", Carbs, 0.35, "piece", (1.0, 1.0, 2.0, 1.0),
            plant_carb(), "Crispy corn tostada shell")),
        ing("rice-spanish", "Spanish Rice", Carbs, 0.30, "oz", (2.0, 1.0, 4.0, 0.5), plant_carb(),
            "Seasoned Spanish rice"),
        // Sauces
        spiced(ing("salsa-mild", "Mild Salsa", Sauces, 0.25, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Fresh mild tomato salsa"), 1),
        spiced(ing("salsa-medium", "Medium Salsa", Sauces, 0.25, "oz", (1.0, 0.5, 3.0, 0.25),
            plant(), "Fresh medium heat salsa"), 2),
        spiced(ing("salsa-hot", "Hot Salsa", Sauces, 0.25, "oz", (0.75, 0.25, 2.0, 0.25), plant(),
            "Fresh hot salsa"), 4),
        spiced(ing("salsa-verde", "Salsa Verde", Sauces, 0.30, "oz", (1.0, 0.5, 2.5, 0.25), plant(),
            "Green tomatillo salsa"), 3),
        ing("guacamole", "Guacamole", Sauces, 0.85, "oz", (1.0, 0.5, 3.0, 0.25), plant(),
            "Fresh homemade guacamole"),
        allergens(ing("sour-cream", "Sour Cream", Sauces, 0.35, "oz", (1.0, 0.5, 2.5, 0.25),
            dairy(), "Fresh sour cream"), &["dairy"]),
        spiced(ing("hot-sauce", "Hot Sauce", Sauces, 0.15, "dash", (3.0, 1.0, 10.0, 1.0), plant(),
            "Spicy hot sauce"), 4),
        spiced(ing("chipotle-sauce", "Chipotle Sauce", Sauces, 0.40, "oz", (0.75, 0.25, 2.0, 0.25),
            plant(), "Smoky chipotle sauce"), 3),
        // Seasonings
        ing("salt", "Salt", Seasonings, 0.05, "pinch", (2.0, 1.0, 5.0, 1.0), plant(), "Sea salt"),
        ing("pepper", "Black Pepper", Seasonings, 0.05, "pinch", (2.0, 1.0, 5.0, 1.0), plant(),
            "Fresh ground black pepper"),
        ing("cumin", "Cumin", Seasonings, 0.10, "pinch", (1.0, 1.0, 3.0, 1.0), plant(),
            "Ground cumin"),
        ing("lime", "Lime Juice", Seasonings, 0.20, "wedge", (1.0, 1.0, 3.0, 1.0), plant(),
            "Fresh lime wedge"),
        // Extras
        niche(spiced(ing("pickles", "Pickled Jalapeños", Extras, 0.25, "oz", (0.5, 0.25, 1.5, 0.25),
            plant(), "Pickled jalapeño slices"), 2)),
        niche(ing("radish", "Pickled Radish", Extras, 0.30, "oz", (0.5, 0.25, 1.0, 0.25), plant(),
            "Pickled radish slices")),
    ]
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    base_price: f64,
    popular: bool,
    ingredients: &[(&str, f64)],
) -> PresetCombination {
    PresetCombination {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        ingredients: ingredients
            .iter()
            .map(|&(id, qty)| SelectedIngredient::new(id, qty))
            .collect(),
        base_price,
        popular,
    }
}

pub(super) fn preset_combinations() -> Vec<PresetCombination> {
    vec![
        preset("breakfast-classic", "Classic Breakfast Taco",
            "Scrambled eggs, bacon, cheese, and hash browns", "Breakfast", 4.25, true,
            &[("tortilla-flour-small", 1.0), ("eggs-scrambled", 2.0), ("bacon", 2.0),
                ("cheese-cheddar", 1.0), ("hash-browns", 1.5), ("salt", 1.0), ("pepper", 1.0)]),
        preset("breakfast-chorizo", "Chorizo & Egg Taco",
            "Spicy chorizo with scrambled eggs and cheese", "Breakfast", 3.95, true,
            &[("tortilla-flour-small", 1.0), ("chorizo", 2.0), ("eggs-scrambled", 2.0),
                ("cheese-mexican", 1.0), ("salsa-mild", 0.5)]),
        preset("al-pastor-classic", "Al Pastor Taco",
            "Traditional al pastor with pineapple and onions", "Tacos", 3.50, true,
            &[("tortilla-corn", 2.0), ("al-pastor", 3.0), ("pineapple", 0.75),
                ("onions-white", 0.5), ("cilantro", 0.25), ("lime", 1.0)]),
        preset("carnitas-supreme", "Carnitas Supreme",
            "Slow-cooked carnitas with all the fixings", "Tacos", 4.75, true,
            &[("tortilla-flour-small", 1.0), ("carnitas", 3.0), ("guacamole", 1.0),
                ("cheese-mexican", 1.0), ("lettuce", 0.5), ("tomatoes", 0.5),
                ("sour-cream", 0.75), ("salsa-medium", 0.75)]),
        preset("carne-asada-street", "Carne Asada Street Style",
            "Simple and authentic street-style carne asada", "Tacos", 4.00, true,
            &[("tortilla-corn", 2.0), ("carne-asada", 3.0), ("onions-white", 0.75),
                ("cilantro", 0.25), ("salsa-verde", 1.0), ("lime", 1.0)]),
        preset("veggie-deluxe", "Veggie Deluxe",
            "Fresh vegetables with beans and avocado", "Vegetarian", 3.75, false,
            &[("tortilla-flour-large", 1.0), ("beans-black", 2.0), ("avocado", 1.5),
                ("cheese-pepper-jack", 1.0), ("lettuce", 1.0), ("tomatoes", 1.0),
                ("peppers-bell", 1.0), ("onions-red", 0.5), ("salsa-medium", 1.0)]),
        preset("fish-baja", "Baja Fish Taco",
            "Grilled fish with citrus slaw and chipotle sauce", "Seafood", 4.50, false,
            &[("tortilla-corn", 2.0), ("fish", 3.0), ("lettuce", 0.75), ("tomatoes", 0.5),
                ("chipotle-sauce", 0.75), ("lime", 1.0), ("cilantro", 0.25)]),
        preset("migas-breakfast", "Migas Breakfast Taco",
            "Scrambled eggs with crispy tortilla strips", "Breakfast", 3.25, true,
            &[("tortilla-flour-small", 1.0), ("eggs-scrambled", 2.0), ("cheese-mexican", 1.0),
                ("peppers-jalapeno", 0.25), ("onions-white", 0.5), ("salsa-mild", 0.75)]),
    ]
}
