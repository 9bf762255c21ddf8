//! HTML rendering for the cookbook page.
//!
//! The page carries every element id the browser controller binds to (see
//! `cookbook_client::page::ids`). The recipe form and the detail panel start
//! hidden; the controller reveals them.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use cookbook_client::page::ingredients::{INGREDIENT_ROW_CLASS, ingredient_row_html};
use cookbook_client::page::{DISPLAY_HIDDEN, RECIPE_LIST_CLASS, ids};

use crate::services::recipe::RecipeSummary;

/// Module script that loads the `wasm-pack` bundle mounted at `/pkg`.
const CLIENT_LOADER: &str = "import init from '/pkg/cookbook_client.js'; init();";

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_recipe_list(recipes: &[RecipeSummary]) -> String {
    if recipes.is_empty() {
        return r#"<p class="empty">No recipes yet.</p>"#.to_owned();
    }
    let items: String = recipes
        .iter()
        .map(|recipe| {
            format!(
                r#"<li><a href="{href}">{name}</a></li>"#,
                href = cookbook_wire::recipe_path(recipe.id),
                name = html_escape(&recipe.name),
            )
        })
        .collect();
    format!(r#"<ul class="{RECIPE_LIST_CLASS}">{items}</ul>"#)
}

fn render_recipe_form() -> String {
    format!(
        r#"<form id="{form}" method="post" action="/cookbook" style="display: {DISPLAY_HIDDEN};">
<label>Name <input type="text" name="recipe_name" required></label>
<div id="{section}"><div class="{INGREDIENT_ROW_CLASS}">{row}</div></div>
<button id="{add}" type="button">Add ingredient</button>
<label>Directions <textarea name="directions" required></textarea></label>
<button type="submit">Save recipe</button>
</form>"#,
        form = ids::RECIPE_FORM,
        section = ids::INGREDIENTS_SECTION,
        row = ingredient_row_html(),
        add = ids::ADD_INGREDIENT,
    )
}

fn render_detail_panel() -> String {
    format!(
        r#"<section id="{panel}" style="display: {DISPLAY_HIDDEN};">
<h2 id="{title}"></h2>
<h3>Ingredients</h3>
<ul id="{list}"></ul>
<h3>Directions</h3>
<p id="{directions}"></p>
</section>"#,
        panel = ids::RECIPE_DETAILS,
        title = ids::RECIPE_TITLE,
        list = ids::INGREDIENTS_LIST,
        directions = ids::DIRECTIONS_TEXT,
    )
}

/// Render the full cookbook page.
#[must_use]
pub fn render_cookbook(recipes: &[RecipeSummary]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Cookbook</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<h1>Cookbook</h1>
<button id="{dark_mode}" type="button">Toggle dark mode</button>
</header>
<main>
<section>
<h2>Recipes</h2>
{list}
</section>
<button id="{toggle_form}" type="button">Add a recipe</button>
{form}
{details}
</main>
<script type="module">{CLIENT_LOADER}</script>
</body>
</html>
"#,
        dark_mode = ids::DARK_MODE_TOGGLE,
        list = render_recipe_list(recipes),
        toggle_form = ids::TOGGLE_FORM,
        form = render_recipe_form(),
        details = render_detail_panel(),
    )
}
