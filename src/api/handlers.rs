use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension, Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::middleware::request_id::RequestId;
use crate::models::{Recipe, RecipeSource};
use crate::services::{recommendations, search_recipes};
use crate::views;

use super::AppState;

// Request/Response types

/// Search submission; a missing field is treated as an empty string
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub ingredients: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub ingredients: String,
    pub source: RecipeSource,
    pub recipes: Vec<Recipe>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Landing page with three recommended recipes
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    let recipes = recommendations::get_recommendations(&state.dataset, &*state.rng).await;

    tracing::info!(
        request_id = %request_id,
        recommendations = recipes.len(),
        "Rendering landing page"
    );

    Html(views::render_index(&recipes))
}

/// Handles a search form submission
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let outcome = search_recipes(state.provider.as_ref(), &state.dataset, &form.ingredients).await;

    tracing::info!(
        request_id = %request_id,
        ingredients = %form.ingredients,
        source = outcome.source.as_str(),
        results = outcome.recipes.len(),
        "Search completed"
    );

    Html(views::render_results(&outcome.recipes, &form.ingredients))
}

/// JSON variant of the search, reporting which tier answered
pub async fn api_search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchForm>,
) -> Json<SearchResponse> {
    let outcome = search_recipes(state.provider.as_ref(), &state.dataset, &params.ingredients).await;

    tracing::info!(
        request_id = %request_id,
        ingredients = %params.ingredients,
        source = outcome.source.as_str(),
        results = outcome.recipes.len(),
        "API search completed"
    );

    Json(SearchResponse {
        ingredients: params.ingredients,
        source: outcome.source,
        recipes: outcome.recipes,
    })
}
