//! HTML pages for the landing and results views.

use crate::models::{Macro, Recipe};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7f7f2; color: #2d2d2d; }
header { background: #3c6e47; color: #fff; padding: 1.5rem 2rem; }
header a { color: #fff; text-decoration: none; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
form textarea { width: 100%; min-height: 4rem; font-size: 1rem; padding: .5rem; }
form button { margin-top: .5rem; padding: .6rem 1.4rem; background: #3c6e47; color: #fff; border: 0; border-radius: 4px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.25rem; }
.card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.card img { width: 100%; height: 200px; object-fit: cover; }
.card .body { padding: 1rem; }
.macros { display: flex; gap: 1rem; font-size: .9rem; }
.tag { display: inline-block; background: #e3efe5; border-radius: 12px; padding: .15rem .6rem; margin: .15rem; font-size: .8rem; }
.score { float: right; font-size: .8rem; color: #666; }
.empty { padding: 2rem; text-align: center; color: #666; }
"#;

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header><h1><a href="/">Recipe Finder</a></h1><p>Cook something healthy with what you already have.</p></header>
<main>
{content}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn search_form(ingredients: &str) -> String {
    format!(
        r#"<form method="post" action="/search">
<label for="ingredients">Ingredients (comma-separated)</label>
<textarea id="ingredients" name="ingredients" placeholder="banana, oats, milk">{}</textarea>
<button type="submit">Find recipes</button>
</form>"#,
        escape(ingredients)
    )
}

fn grams(value: Macro) -> String {
    match value {
        Macro::Amount(_) => format!("{}g", value),
        Macro::NotAvailable => value.to_string(),
    }
}

fn recipe_card(recipe: &Recipe) -> String {
    let score = recipe
        .match_score
        .map(|score| {
            format!(
                r#"<span class="score">{} matching ingredient{}</span>"#,
                score,
                if score == 1 { "" } else { "s" }
            )
        })
        .unwrap_or_default();

    let tags: String = recipe
        .health_benefits
        .iter()
        .map(|benefit| format!(r#"<span class="tag">{}</span>"#, escape(benefit)))
        .collect();

    let mut links = format!(
        r#"<a href="{}" target="_blank" rel="noopener">Watch tutorial</a>"#,
        escape(&recipe.youtube_url)
    );
    if recipe.has_source() {
        links.push_str(&format!(
            r#" · <a href="{}" target="_blank" rel="noopener">View source</a>"#,
            escape(&recipe.source_url)
        ));
    }

    format!(
        r#"<article class="card">
<img src="{image}" alt="{name}">
<div class="body">
{score}<h3>{name}</h3>
<p>{description}</p>
<div class="macros"><span>Calories: {calories}</span><span>Protein: {protein}</span><span>Fat: {fat}</span></div>
<div class="tags">{tags}</div>
<p>{links}</p>
</div>
</article>
"#,
        image = escape(&recipe.image),
        name = escape(&recipe.name),
        description = escape(&recipe.description),
        calories = recipe.calories,
        protein = grams(recipe.protein),
        fat = grams(recipe.fat),
    )
}

fn recipe_grid(recipes: &[Recipe]) -> String {
    let cards: String = recipes.iter().map(recipe_card).collect();
    format!(r#"<section class="grid">{}</section>"#, cards)
}

/// Landing page with the search form and recommended recipes
pub fn render_index(recommendations: &[Recipe]) -> String {
    let content = format!(
        "{}\n<h2>Recommended for you</h2>\n{}",
        search_form(""),
        recipe_grid(recommendations)
    );
    layout("Recipe Finder", &content)
}

/// Results page for a search, echoing the submitted ingredients
pub fn render_results(recipes: &[Recipe], ingredients: &str) -> String {
    let listing = if recipes.is_empty() {
        r#"<p class="empty">No recipes matched those ingredients. Try adding a few more.</p>"#
            .to_string()
    } else {
        recipe_grid(recipes)
    };

    let content = format!(
        "{}\n<h2>Recipes for: {}</h2>\n{}\n<p><a href=\"/\">Back to home</a></p>",
        search_form(ingredients),
        escape(ingredients),
        listing
    );
    layout("Recipe Finder - Results", &content)
}
