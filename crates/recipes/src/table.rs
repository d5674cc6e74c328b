//! The built-in recipe table.

/// A recipe and the ingredient names it requires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

const BUILT_IN: &[Recipe] = &[
    Recipe {
        name: "Pasta",
        ingredients: &["Pasta", "Tomato Sauce", "Cheese"],
    },
    Recipe {
        name: "Salad",
        ingredients: &["Lettuce", "Tomato", "Cucumber"],
    },
    Recipe {
        name: "Sandwich",
        ingredients: &["Bread", "Lettuce", "Cheese", "Ham"],
    },
];

/// Immutable recipe table. Iteration follows declaration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecipeTable {
    recipes: &'static [Recipe],
}

impl RecipeTable {
    /// The table shipped with the application.
    pub const fn built_in() -> Self {
        Self { recipes: BUILT_IN }
    }

    pub const fn from_static(recipes: &'static [Recipe]) -> Self {
        Self { recipes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&'static Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeTable {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_lists_recipes_in_order() {
        let names: Vec<_> = RecipeTable::built_in().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Pasta", "Salad", "Sandwich"]);
    }

    #[test]
    fn lookup_by_name() {
        let sandwich = RecipeTable::built_in().get("Sandwich").unwrap();
        assert_eq!(sandwich.ingredients, &["Bread", "Lettuce", "Cheese", "Ham"]);
        assert!(RecipeTable::built_in().get("Soup").is_none());
    }
}
