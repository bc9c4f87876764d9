use crate::models::Recipe;

/// Maximum number of recipes returned by a search
pub const MAX_RESULTS: usize = 6;

/// Splits a raw comma-separated ingredient list into lowercase query terms
///
/// Empty and duplicate terms are kept as-is.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(',').map(|term| term.trim().to_lowercase()).collect()
}

/// Number of query terms found as a substring of at least one ingredient
///
/// Containment, not equality: "pea" matches "peanut butter".
pub fn match_score(terms: &[String], ingredients: &[String]) -> u32 {
    let ingredients: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

    terms
        .iter()
        .filter(|term| ingredients.iter().any(|i| i.contains(term.as_str())))
        .count() as u32
}

/// Ranks dataset recipes against the user's ingredients
///
/// Recipes scoring zero are dropped. The rest are ordered by score, highest
/// first, keeping dataset order between equal scores, and cut to
/// [`MAX_RESULTS`].
pub fn match_recipes(raw_ingredients: &str, recipes: Vec<Recipe>) -> Vec<Recipe> {
    let terms = parse_terms(raw_ingredients);

    let mut matches: Vec<Recipe> = recipes
        .into_iter()
        .filter_map(|mut recipe| {
            let score = match_score(&terms, &recipe.ingredients);
            (score > 0).then(|| {
                recipe.match_score = Some(score);
                recipe
            })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(MAX_RESULTS);
    matches
}
