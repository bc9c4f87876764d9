use crate::{
    models::Recipe,
    services::{dataset::LocalDataset, defaults::default_recommendations},
};
use rand::{seq::SliceRandom, Rng};
use tokio::sync::Mutex;

/// Number of recipes shown on the landing page
pub const RECOMMENDATION_COUNT: usize = 3;

/// Picks landing page recipes from the dataset contents
///
/// Chooses [`RECOMMENDATION_COUNT`] recipes uniformly at random without
/// replacement. Smaller datasets are returned whole, in dataset order.
pub fn pick_recommendations<R: Rng + ?Sized>(recipes: Vec<Recipe>, rng: &mut R) -> Vec<Recipe> {
    if recipes.len() < RECOMMENDATION_COUNT {
        return recipes;
    }

    recipes
        .choose_multiple(rng, RECOMMENDATION_COUNT)
        .cloned()
        .collect()
}

/// Generates landing page recommendations
///
/// Falls back to the hardcoded set when the dataset cannot be loaded.
pub async fn get_recommendations<R: Rng + Send>(
    dataset: &LocalDataset,
    rng: &Mutex<R>,
) -> Vec<Recipe> {
    let recipes = match dataset.load().await {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %dataset.path().display(),
                "Local dataset unavailable, using default recommendations"
            );
            return default_recommendations();
        }
    };

    let mut rng = rng.lock().await;
    pick_recommendations(recipes, &mut *rng)
}
