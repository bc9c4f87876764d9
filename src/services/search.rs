use crate::{
    models::{Recipe, RecipeSource},
    services::{
        dataset::LocalDataset,
        defaults::default_search_recipes,
        matcher::match_recipes,
        providers::{RecipeLookup, RecipeProvider},
    },
};

/// Recipes for one search, tagged with the tier that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub source: RecipeSource,
    pub recipes: Vec<Recipe>,
}

/// Outcome of the local tier
enum LocalLookup {
    Matched(Vec<Recipe>),
    Unreadable,
}

async fn search_local(dataset: &LocalDataset, ingredients: &str) -> LocalLookup {
    match dataset.load().await {
        Ok(recipes) => LocalLookup::Matched(match_recipes(ingredients, recipes)),
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %dataset.path().display(),
                "Local dataset unavailable"
            );
            LocalLookup::Unreadable
        }
    }
}

/// Runs the fallback chain for an ingredient search
///
/// External provider first, then the local dataset matcher, then the
/// hardcoded defaults if the dataset cannot be read.
pub async fn search_recipes(
    provider: &dyn RecipeProvider,
    dataset: &LocalDataset,
    ingredients: &str,
) -> SearchOutcome {
    if let RecipeLookup::Found(recipes) = provider.find_by_ingredients(ingredients).await {
        return SearchOutcome {
            source: RecipeSource::External,
            recipes,
        };
    }

    tracing::debug!(
        provider = provider.name(),
        "External provider unavailable, searching local dataset"
    );

    match search_local(dataset, ingredients).await {
        LocalLookup::Matched(recipes) => SearchOutcome {
            source: RecipeSource::Local,
            recipes,
        },
        LocalLookup::Unreadable => SearchOutcome {
            source: RecipeSource::Default,
            recipes: default_search_recipes(),
        },
    }
}
