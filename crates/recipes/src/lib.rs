//! Recipe suggestions.
//!
//! A fixed, compiled-in recipe table and a matcher that checks it against the
//! names currently held in an inventory. Matching is exact set containment:
//! quantity and expiration play no part.

pub mod matcher;
pub mod table;

pub use matcher::{IngredientSource, suggest_recipes};
pub use table::{Recipe, RecipeTable};
