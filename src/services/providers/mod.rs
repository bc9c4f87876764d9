//! External recipe data providers
//!
//! A provider answers an ingredient search with fully enriched recipes, or
//! reports itself unavailable so the caller can move on to the local dataset.

use crate::models::Recipe;

pub mod spoonacular;

pub use spoonacular::SpoonacularProvider;

/// Result of asking an external provider for recipes
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeLookup {
    /// Enriched recipes, at most six, in provider order
    Found(Vec<Recipe>),
    /// Provider could not answer; the reason has already been logged
    Unavailable,
}

/// Trait for external recipe providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Find recipes using the given comma-separated ingredients
    ///
    /// Never fails: any error along the way yields [`RecipeLookup::Unavailable`]
    /// and partial results are discarded.
    async fn find_by_ingredients(&self, ingredients: &str) -> RecipeLookup;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
