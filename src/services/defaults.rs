//! Hardcoded recipes served when the local dataset cannot be read.

use crate::models::{Macro, Recipe};

fn default_recipe(
    name: &str,
    description: &str,
    (calories, protein, fat): (f64, f64, f64),
    health_benefits: &[&str],
    youtube_query: &str,
    ingredients: &[&str],
) -> Recipe {
    Recipe {
        name: name.to_string(),
        image: format!(
            "https://via.placeholder.com/300x200?text={}",
            name.replace(' ', "+")
        ),
        description: description.to_string(),
        calories: Macro::Amount(calories),
        protein: Macro::Amount(protein),
        fat: Macro::Amount(fat),
        health_benefits: health_benefits.iter().map(|s| s.to_string()).collect(),
        youtube_url: format!(
            "https://www.youtube.com/results?search_query={}",
            youtube_query
        ),
        source_url: "#".to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        match_score: None,
    }
}

fn banana_oat_smoothie() -> Recipe {
    default_recipe(
        "Banana Oat Smoothie",
        "A creamy and nutritious smoothie perfect for breakfast or post-workout.",
        (250.0, 8.0, 5.0),
        &["High in fiber", "Energy boosting", "Heart healthy"],
        "banana+oat+smoothie+recipe",
        &["banana", "oats", "milk", "honey"],
    )
}

/// Search results when the dataset is unreadable
pub fn default_search_recipes() -> Vec<Recipe> {
    vec![banana_oat_smoothie()]
}

/// Landing page recommendations when the dataset is unreadable
pub fn default_recommendations() -> Vec<Recipe> {
    vec![
        banana_oat_smoothie(),
        default_recipe(
            "Vegetable Stir Fry",
            "Crisp seasonal vegetables tossed in a quick garlic and soy sauce.",
            (320.0, 12.0, 9.0),
            &["Rich in vitamins", "Low in fat", "Vegetarian-friendly"],
            "vegetable+stir+fry+recipe",
            &["broccoli", "carrot", "bell pepper", "soy sauce", "garlic"],
        ),
        default_recipe(
            "Greek Salad",
            "A fresh salad of tomato, cucumber and feta with olive oil.",
            (180.0, 6.0, 14.0),
            &["Rich in antioxidants", "Heart healthy", "Low carb"],
            "greek+salad+recipe",
            &["tomato", "cucumber", "feta cheese", "olive oil", "red onion"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_recipes() {
        let recipes = default_search_recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Banana Oat Smoothie");
        assert_eq!(recipes[0].calories, Macro::Amount(250.0));
    }

    #[test]
    fn test_default_recommendations_are_distinct() {
        let recipes = default_recommendations();
        assert_eq!(recipes.len(), 3);
        assert_ne!(recipes[0].name, recipes[1].name);
        assert_ne!(recipes[1].name, recipes[2].name);
        assert_ne!(recipes[0].name, recipes[2].name);
    }
}
