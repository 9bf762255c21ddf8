//! Recipe detail loader.
//!
//! Clicking a recipe link fetches `GET /recipes/{id}` and rewrites the detail
//! panel from the response: title, ingredient list, directions, then reveals
//! the panel.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch or malformed body returns the error before any DOM write,
//! so the panel keeps whatever it showed before. Nothing is surfaced to the
//! user; the browser binding only logs.
//!
//! Concurrent loads are not sequenced. Each completed fetch renders as it
//! arrives, so a slow earlier response can overwrite a later one.

#[cfg(test)]
#[path = "recipe_details_test.rs"]
mod recipe_details_test;

use cookbook_wire::Recipe;

use super::dom::PageDom;
use super::{DISPLAY_SHOWN, ids};
use crate::net::api::{ApiError, RecipeSource};

/// Recipe identifier carried by a link target: everything after the last `/`.
///
/// `"/recipes/42"` yields `"42"`; a trailing slash yields the empty string.
#[must_use]
pub fn recipe_id_from_href(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Populate the detail panel from `recipe` and reveal it.
///
/// The ingredient list is cleared before items are appended in received order.
pub fn show_recipe(dom: &impl PageDom, recipe: &Recipe) {
    dom.set_text(ids::RECIPE_TITLE, &recipe.name);
    dom.clear_children(ids::INGREDIENTS_LIST);
    for ingredient in &recipe.ingredients {
        dom.append_list_item(ids::INGREDIENTS_LIST, &ingredient.to_string());
    }
    dom.set_text(ids::DIRECTIONS_TEXT, &recipe.directions);
    dom.set_display(ids::RECIPE_DETAILS, DISPLAY_SHOWN);
}

/// An element whose `href` names a recipe.
///
/// The target is read when the link is followed, not when it is bound, so a
/// link retargeted after load opens its current recipe.
pub trait RecipeLink {
    /// Current `href` attribute, `None` when the attribute is absent.
    fn href(&self) -> Option<String>;
}

/// Fetch the recipe a link points at and show it.
///
/// # Errors
///
/// Returns the fetch error untouched; the panel is not modified in that case.
pub async fn load_recipe(dom: &impl PageDom, source: &impl RecipeSource, href: &str) -> Result<(), ApiError> {
    let id = recipe_id_from_href(href);
    let recipe = source.fetch_recipe(id).await?;
    log::debug!("showing recipe {id}: {}", recipe.name);
    show_recipe(dom, &recipe);
    Ok(())
}

/// Follow a clicked recipe link. A link without an `href` fetches nothing.
///
/// # Errors
///
/// Returns the fetch error untouched; the panel is not modified in that case.
pub async fn follow_link(
    dom: &impl PageDom,
    source: &impl RecipeSource,
    link: &impl RecipeLink,
) -> Result<(), ApiError> {
    let Some(href) = link.href() else {
        log::debug!("recipe link without href ignored");
        return Ok(());
    };
    load_recipe(dom, source, &href).await
}
