//! `TheCocktailDB` lookups and recipe formatting.

pub mod client;
pub mod format;
pub mod types;

pub use client::{CocktailDbClient, RecipeSource};
pub use format::format_recipe;
pub use types::{DrinkSummary, IngredientResponse, IngredientSlot, RecipeRecord, RecipeResponse};
