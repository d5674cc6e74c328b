//! Recipe matcher: a read-only view over an inventory snapshot.

use std::collections::{BTreeSet, HashSet};

use larder_inventory::Inventory;

use crate::table::{Recipe, RecipeTable};

/// Anything that can answer "is this ingredient on hand?".
pub trait IngredientSource {
    fn has_ingredient(&self, name: &str) -> bool;
}

impl IngredientSource for Inventory {
    fn has_ingredient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl IngredientSource for BTreeSet<String> {
    fn has_ingredient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl IngredientSource for HashSet<&str> {
    fn has_ingredient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl Recipe {
    /// True when every required ingredient is present in `source`.
    pub fn is_satisfied_by<S: IngredientSource + ?Sized>(&self, source: &S) -> bool {
        self.ingredients.iter().all(|i| source.has_ingredient(i))
    }
}

/// Names of recipes whose ingredients are all held, in table order.
pub fn suggest_recipes<S: IngredientSource + ?Sized>(
    inventory: &S,
    table: &RecipeTable,
) -> Vec<&'static str> {
    table
        .iter()
        .filter(|recipe| recipe.is_satisfied_by(inventory))
        .map(|recipe| recipe.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::{ExpirationDate, ItemName, Quantity};
    use larder_inventory::InventoryItem;
    use proptest::prelude::*;

    fn inventory_with(names: &[&str], expiration: &str) -> Inventory {
        names
            .iter()
            .map(|n| {
                InventoryItem::new(
                    ItemName::new(*n).unwrap(),
                    Quantity::new(1).unwrap(),
                    ExpirationDate::parse(expiration).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn suggests_only_fully_stocked_recipes() {
        let inv = inventory_with(&["Pasta", "Tomato Sauce", "Cheese", "Bread"], "2030-01-01");
        assert_eq!(suggest_recipes(&inv, &RecipeTable::built_in()), vec!["Pasta"]);
    }

    #[test]
    fn expired_items_still_count_as_available() {
        let inv = inventory_with(&["Lettuce", "Tomato", "Cucumber"], "2000-01-01");
        assert_eq!(suggest_recipes(&inv, &RecipeTable::built_in()), vec!["Salad"]);
    }

    #[test]
    fn shared_ingredients_can_satisfy_several_recipes() {
        let inv = inventory_with(
            &["Pasta", "Tomato Sauce", "Cheese", "Bread", "Lettuce", "Ham"],
            "2030-01-01",
        );
        assert_eq!(
            suggest_recipes(&inv, &RecipeTable::built_in()),
            vec!["Pasta", "Sandwich"]
        );
    }

    #[test]
    fn matching_is_exact_string_equality() {
        let inv = inventory_with(&["pasta", "Tomato sauce", "Cheese "], "2030-01-01");
        assert!(suggest_recipes(&inv, &RecipeTable::built_in()).is_empty());
    }

    #[test]
    fn empty_inventory_suggests_nothing() {
        assert!(suggest_recipes(&Inventory::new(), &RecipeTable::built_in()).is_empty());
    }

    #[test]
    fn works_against_plain_name_sets() {
        let held: HashSet<&str> = ["Lettuce", "Tomato", "Cucumber"].into_iter().collect();
        assert_eq!(suggest_recipes(&held, &RecipeTable::built_in()), vec!["Salad"]);
    }

    const ALL_INGREDIENTS: &[&str] = &[
        "Pasta", "Tomato Sauce", "Cheese", "Lettuce", "Tomato", "Cucumber", "Bread", "Ham",
    ];

    proptest! {
        /// Property: a recipe is suggested iff its ingredients are a subset of
        /// the held names.
        #[test]
        fn suggestion_is_subset_check(mask in prop::collection::vec(any::<bool>(), ALL_INGREDIENTS.len())) {
            let held: BTreeSet<String> = ALL_INGREDIENTS
                .iter()
                .zip(mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(name, _)| name.to_string())
                .collect();

            let table = RecipeTable::built_in();
            let suggested = suggest_recipes(&held, &table);
            for recipe in table.iter() {
                let subset = recipe.ingredients.iter().all(|i| held.contains(*i));
                prop_assert_eq!(suggested.contains(&recipe.name), subset);
            }
        }
    }
}
