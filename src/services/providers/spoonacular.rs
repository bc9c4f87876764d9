//! Spoonacular API provider
//!
//! API Flow:
//! 1. Lookup: /findByIngredients → up to six hits (id, title, image)
//! 2. Enrichment: /{id}/information → summary, source link, dietary flags, nutrients
//!
//! One detail call is made per hit, sequentially, each bounded by the same
//! timeout. Any failure discards everything fetched so far.

use crate::{
    config::{Config, UNCONFIGURED_API_KEY},
    error::{AppError, AppResult},
    models::{ApiRecipeDetails, ApiRecipeHit, Recipe},
    services::{
        matcher::MAX_RESULTS,
        providers::{RecipeLookup, RecipeProvider},
    },
};
use reqwest::{Client as HttpClient, Response};
use std::time::Duration;

/// Minimize missing ingredients
const RANKING_MINIMIZE_MISSING: &str = "1";

#[derive(Clone)]
pub struct SpoonacularProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl SpoonacularProvider {
    /// Creates a provider whose every call is bounded by `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.spoonacular_api_key.clone(),
            config.spoonacular_api_url.clone(),
            config.request_timeout(),
        )
    }

    /// Whether a usable API key was supplied
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != UNCONFIGURED_API_KEY
    }

    async fn ensure_success(response: Response, endpoint: &str) -> AppResult<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Spoonacular {} returned status {}: {}",
                endpoint, status, body
            )));
        }
        Ok(response)
    }

    async fn find_hits(&self, ingredients: &str) -> AppResult<Vec<ApiRecipeHit>> {
        let url = format!("{}/findByIngredients", self.api_url);
        let number = MAX_RESULTS.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ingredients", ingredients),
                ("number", number.as_str()),
                ("ranking", RANKING_MINIMIZE_MISSING),
                ("ignorePantry", "true"),
            ])
            .send()
            .await?;

        let hits: Vec<ApiRecipeHit> = Self::ensure_success(response, "findByIngredients")
            .await?
            .json()
            .await?;

        Ok(hits)
    }

    async fn fetch_details(&self, recipe_id: u64) -> AppResult<ApiRecipeDetails> {
        let url = format!("{}/{}/information", self.api_url, recipe_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("includeNutrition", "true"),
            ])
            .send()
            .await?;

        let details: ApiRecipeDetails = Self::ensure_success(response, "information")
            .await?
            .json()
            .await?;

        Ok(details)
    }

    async fn try_find_by_ingredients(&self, ingredients: &str) -> AppResult<Vec<Recipe>> {
        if !self.is_configured() {
            return Err(AppError::NotConfigured);
        }

        let hits = self.find_hits(ingredients).await?;
        if hits.is_empty() {
            return Err(AppError::ExternalApi(
                "Spoonacular returned no recipes".to_string(),
            ));
        }

        let mut recipes = Vec::with_capacity(hits.len());
        for hit in hits.into_iter().take(MAX_RESULTS) {
            let details = self.fetch_details(hit.id).await?;
            recipes.push(Recipe::from((hit, details)));
        }

        Ok(recipes)
    }
}

#[async_trait::async_trait]
impl RecipeProvider for SpoonacularProvider {
    async fn find_by_ingredients(&self, ingredients: &str) -> RecipeLookup {
        match self.try_find_by_ingredients(ingredients).await {
            Ok(recipes) => {
                tracing::info!(
                    ingredients = %ingredients,
                    results = recipes.len(),
                    provider = self.name(),
                    "Recipe lookup completed"
                );
                RecipeLookup::Found(recipes)
            }
            Err(AppError::NotConfigured) => {
                tracing::debug!(provider = self.name(), "No API key configured, skipping");
                RecipeLookup::Unavailable
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.name(),
                    "Recipe lookup failed"
                );
                RecipeLookup::Unavailable
            }
        }
    }

    fn name(&self) -> &'static str {
        "spoonacular"
    }
}
