use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use recipe_finder::models::Macro;
use recipe_finder::services::{RecipeLookup, RecipeProvider, SpoonacularProvider};

const TEST_KEY: &str = "test-key";

/// Behaviour of the fake Spoonacular server
#[derive(Clone, Copy)]
enum Mode {
    Healthy,
    LookupFails,
    SecondDetailFails,
    NoHits,
    Malformed,
    Slow,
}

#[derive(Clone)]
struct MockState {
    mode: Mode,
    detail_calls: Arc<AtomicUsize>,
}

async fn find_by_ingredients(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let expected = [
        ("apiKey", TEST_KEY),
        ("number", "6"),
        ("ranking", "1"),
        ("ignorePantry", "true"),
    ];
    if expected
        .iter()
        .any(|(k, v)| params.get(*k).map(String::as_str) != Some(*v))
    {
        return (StatusCode::BAD_REQUEST, "unexpected query").into_response();
    }

    match state.mode {
        Mode::LookupFails => (StatusCode::UNAUTHORIZED, "bad key").into_response(),
        Mode::NoHits => Json(json!([])).into_response(),
        Mode::Malformed => Json(json!([{ "title": "No id here" }])).into_response(),
        Mode::Slow => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!([])).into_response()
        }
        _ => Json(json!([
            {
                "id": 101,
                "title": "Banana Pancakes",
                "image": "https://img.example.com/101.jpg",
                "usedIngredientCount": 2
            },
            {
                "id": 202,
                "title": "Oat Cookies"
            }
        ]))
        .into_response(),
    }
}

async fn information(
    State(state): State<MockState>,
    Path(id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.detail_calls.fetch_add(1, Ordering::SeqCst);

    if params.get("includeNutrition").map(String::as_str) != Some("true") {
        return (StatusCode::BAD_REQUEST, "nutrition not requested").into_response();
    }

    match (state.mode, id) {
        (Mode::SecondDetailFails, 202) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        }
        (_, 101) => Json(json!({
            "summary": "Fluffy <b>banana</b> pancakes.",
            "sourceUrl": "https://example.com/pancakes",
            "vegetarian": true,
            "nutrition": {
                "nutrients": [
                    {"name": "Calories", "amount": 310.0, "unit": "kcal"},
                    {"name": "Protein", "amount": 9.5, "unit": "g"},
                    {"name": "Fat", "amount": 8.0, "unit": "g"}
                ]
            }
        }))
        .into_response(),
        _ => Json(json!({})).into_response(),
    }
}

/// Serves the fake API on an ephemeral port and returns its base URL
async fn spawn_mock(mode: Mode) -> (String, Arc<AtomicUsize>) {
    let detail_calls = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        mode,
        detail_calls: detail_calls.clone(),
    };

    let app = Router::new()
        .route("/recipes/findByIngredients", get(find_by_ingredients))
        .route("/recipes/:id/information", get(information))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/recipes", address), detail_calls)
}

fn provider(api_url: String, timeout: Duration) -> SpoonacularProvider {
    SpoonacularProvider::new(TEST_KEY.to_string(), api_url, timeout).unwrap()
}

#[tokio::test]
async fn test_lookup_enriches_each_hit() {
    let (url, detail_calls) = spawn_mock(Mode::Healthy).await;
    let provider = provider(url, Duration::from_secs(5));

    let recipes = match provider.find_by_ingredients("banana, oats").await {
        RecipeLookup::Found(recipes) => recipes,
        RecipeLookup::Unavailable => panic!("expected recipes"),
    };

    assert_eq!(detail_calls.load(Ordering::SeqCst), 2);
    assert_eq!(recipes.len(), 2);

    let pancakes = &recipes[0];
    assert_eq!(pancakes.name, "Banana Pancakes");
    assert_eq!(pancakes.image, "https://img.example.com/101.jpg");
    assert_eq!(pancakes.description, "Fluffy banana pancakes.");
    assert_eq!(pancakes.calories, Macro::Amount(310.0));
    assert_eq!(pancakes.protein, Macro::Amount(9.5));
    assert_eq!(pancakes.fat, Macro::Amount(8.0));
    assert_eq!(pancakes.health_benefits, vec!["Vegetarian-friendly"]);
    assert_eq!(pancakes.source_url, "https://example.com/pancakes");
    assert!(pancakes
        .youtube_url
        .ends_with("Banana+Pancakes+recipe+tutorial"));

    let cookies = &recipes[1];
    assert_eq!(cookies.name, "Oat Cookies");
    assert_eq!(
        cookies.image,
        "https://via.placeholder.com/300x200?text=No+Image"
    );
    assert_eq!(cookies.calories, Macro::NotAvailable);
    assert_eq!(cookies.source_url, "#");
    assert_eq!(
        cookies.health_benefits,
        vec!["Nutritious meal", "Balanced ingredients", "Home-cooked goodness"]
    );
}

#[tokio::test]
async fn test_lookup_failure_is_unavailable() {
    let (url, detail_calls) = spawn_mock(Mode::LookupFails).await;
    let provider = provider(url, Duration::from_secs(5));

    let result = provider.find_by_ingredients("banana").await;
    assert_eq!(result, RecipeLookup::Unavailable);
    assert_eq!(detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_detail_failure_discards_partial_results() {
    let (url, detail_calls) = spawn_mock(Mode::SecondDetailFails).await;
    let provider = provider(url, Duration::from_secs(5));

    let result = provider.find_by_ingredients("banana").await;
    assert_eq!(result, RecipeLookup::Unavailable);
    assert_eq!(detail_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_no_hits_is_unavailable() {
    let (url, _) = spawn_mock(Mode::NoHits).await;
    let provider = provider(url, Duration::from_secs(5));

    let result = provider.find_by_ingredients("durian").await;
    assert_eq!(result, RecipeLookup::Unavailable);
}

#[tokio::test]
async fn test_malformed_payload_is_unavailable() {
    let (url, detail_calls) = spawn_mock(Mode::Malformed).await;
    let provider = provider(url, Duration::from_secs(5));

    let result = provider.find_by_ingredients("banana").await;
    assert_eq!(result, RecipeLookup::Unavailable);
    assert_eq!(detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let (url, _) = spawn_mock(Mode::Slow).await;
    let provider = provider(url, Duration::from_millis(200));

    let result = provider.find_by_ingredients("banana").await;
    assert_eq!(result, RecipeLookup::Unavailable);
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    let provider = provider("http://127.0.0.1:9/recipes".to_string(), Duration::from_secs(1));

    let result = provider.find_by_ingredients("banana").await;
    assert_eq!(result, RecipeLookup::Unavailable);
}
