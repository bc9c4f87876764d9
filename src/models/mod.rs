use scraper::Html;
use serde::{Deserialize, Serialize};

pub mod recipe;

pub use recipe::{
    generic_health_benefits, youtube_search_url, DietaryFlags, Macro, Recipe, DEFAULT_DESCRIPTION,
    PLACEHOLDER_IMAGE, UNKNOWN_SOURCE_URL,
};

/// Which tier of the fallback chain produced a result list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// Spoonacular API
    External,
    /// Bundled dataset, ranked by the ingredient matcher
    Local,
    /// Hardcoded defaults
    Default,
}

impl RecipeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeSource::External => "external",
            RecipeSource::Local => "local",
            RecipeSource::Default => "default",
        }
    }
}

// ============================================================================
// Spoonacular API Types
// ============================================================================

/// One hit from `/recipes/findByIngredients`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeHit {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload of `/recipes/{id}/information`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecipeDetails {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub nutrition: Option<ApiNutrition>,
    #[serde(flatten)]
    pub flags: DietaryFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiNutrition {
    #[serde(default)]
    pub nutrients: Vec<ApiNutrient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiNutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl ApiRecipeDetails {
    /// Amount of the nutrient with exactly this name
    pub fn nutrient(&self, name: &str) -> Macro {
        self.nutrition
            .as_ref()
            .and_then(|n| n.nutrients.iter().find(|nutrient| nutrient.name == name))
            .map(|nutrient| Macro::Amount(nutrient.amount))
            .unwrap_or(Macro::NotAvailable)
    }
}

impl From<(ApiRecipeHit, ApiRecipeDetails)> for Recipe {
    fn from((hit, details): (ApiRecipeHit, ApiRecipeDetails)) -> Self {
        let description = details
            .summary
            .as_deref()
            .map(summary_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Recipe {
            youtube_url: youtube_search_url(&hit.title),
            image: hit.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description,
            calories: details.nutrient("Calories"),
            protein: details.nutrient("Protein"),
            fat: details.nutrient("Fat"),
            health_benefits: details.flags.health_benefits(),
            source_url: details
                .source_url
                .clone()
                .unwrap_or_else(|| UNKNOWN_SOURCE_URL.to_string()),
            name: hit.title,
            ingredients: Vec::new(),
            match_score: None,
        }
    }
}

/// Plain text of a Spoonacular summary, which embeds `<b>` and `<a>` tags
/// and HTML entities
fn summary_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
