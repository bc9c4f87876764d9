use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";
pub const DEFAULT_DESCRIPTION: &str = "A delicious and healthy recipe!";
pub const UNKNOWN_SOURCE_URL: &str = "#";

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Tags used when a recipe carries no dietary flags
pub const GENERIC_HEALTH_BENEFITS: [&str; 3] = [
    "Nutritious meal",
    "Balanced ingredients",
    "Home-cooked goodness",
];

/// A macro-nutrient estimate, or the "not available" sentinel
///
/// Serializes as a bare number or as the string `"N/A"`. Any string on input
/// is read as "not available".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Macro {
    Amount(f64),
    #[default]
    NotAvailable,
}

impl Display for Macro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Macro::Amount(amount) => write!(f, "{}", amount),
            Macro::NotAvailable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Macro {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Macro::Amount(amount) => serializer.serialize_f64(*amount),
            Macro::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Macro {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(amount)) => Macro::Amount(amount),
            Some(Raw::Text(_)) | None => Macro::NotAvailable,
        })
    }
}

/// Boolean dietary flags as reported by the recipe API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub very_healthy: bool,
}

impl DietaryFlags {
    /// Short display tags for the set flags, in a fixed order
    pub fn health_benefits(&self) -> Vec<String> {
        let tags = [
            (self.vegetarian, "Vegetarian-friendly"),
            (self.vegan, "Vegan-friendly"),
            (self.gluten_free, "Gluten-free"),
            (self.dairy_free, "Dairy-free"),
            (self.very_healthy, "Very healthy option"),
        ];

        let benefits: Vec<String> = tags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, tag)| tag.to_string())
            .collect();

        if benefits.is_empty() {
            generic_health_benefits()
        } else {
            benefits
        }
    }
}

pub fn generic_health_benefits() -> Vec<String> {
    GENERIC_HEALTH_BENEFITS.iter().map(|s| s.to_string()).collect()
}

/// Builds the YouTube tutorial search link for a recipe name
pub fn youtube_search_url(recipe_name: &str) -> String {
    format!(
        "{}{}+recipe+tutorial",
        YOUTUBE_SEARCH_URL,
        recipe_name.replace(' ', "+")
    )
}

/// A recipe as shown to the user, from either the API or the local dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub calories: Macro,
    #[serde(default)]
    pub protein: Macro,
    #[serde(default)]
    pub fat: Macro,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default = "default_source_url")]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Only set on local dataset search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_source_url() -> String {
    UNKNOWN_SOURCE_URL.to_string()
}

impl Recipe {
    /// Fills derived fields a dataset record may leave empty
    pub fn with_derived_fields(mut self) -> Self {
        if self.youtube_url.trim().is_empty() {
            self.youtube_url = youtube_search_url(&self.name);
        }
        if self.health_benefits.is_empty() {
            self.health_benefits = generic_health_benefits();
        }
        self
    }

    pub fn has_source(&self) -> bool {
        !self.source_url.is_empty() && self.source_url != UNKNOWN_SOURCE_URL
    }
}
