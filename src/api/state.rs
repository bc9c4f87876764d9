use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{LocalDataset, RecipeProvider, SpoonacularProvider};

/// Shared application state
///
/// Holds no per-request data. The dataset handle only knows the file path;
/// the random source is the single piece of mutable state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RecipeProvider>,
    pub dataset: Arc<LocalDataset>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Creates application state from explicit parts
    pub fn new(provider: Arc<dyn RecipeProvider>, dataset: LocalDataset, rng: StdRng) -> Self {
        Self {
            provider,
            dataset: Arc::new(dataset),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Wires the Spoonacular provider and the bundled dataset from config
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = SpoonacularProvider::from_config(config)?;
        if !provider.is_configured() {
            tracing::warn!("SPOONACULAR_API_KEY not set, searches will use the local dataset");
        }

        let rng = match config.recommendation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::new(
            Arc::new(provider),
            LocalDataset::new(config.dataset_path.clone()),
            rng,
        ))
    }
}
