//! `GET /cookbook` page and `POST /cookbook` recipe submission.
//!
//! The form posts one `recipe_name`, one `directions`, and the repeated
//! `ingredient_*[]` fields of every ingredient row on the page. Submissions
//! without a name or directions are ignored. Either way the browser is sent
//! back to the page.

#[cfg(test)]
#[path = "cookbook_test.rs"]
mod cookbook_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::recipes::recipe_error_to_status;
use crate::services::recipe::{self, NewRecipe, zip_ingredients};
use crate::state::AppState;
use crate::templates;

/// Body of `POST /cookbook`.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub directions: String,
    #[serde(default, rename = "ingredient_quantity[]")]
    pub quantities: Vec<String>,
    #[serde(default, rename = "ingredient_unit[]")]
    pub units: Vec<String>,
    #[serde(default, rename = "ingredient_name[]")]
    pub names: Vec<String>,
}

impl RecipeForm {
    /// The recipe to create, or `None` when the name or directions are empty.
    #[must_use]
    pub fn into_new_recipe(self) -> Option<NewRecipe> {
        if self.recipe_name.is_empty() || self.directions.is_empty() {
            return None;
        }
        Some(NewRecipe {
            name: self.recipe_name,
            directions: self.directions,
            ingredients: zip_ingredients(self.quantities, self.units, self.names),
        })
    }
}

/// `GET /cookbook` — recipe list, entry form, and detail panel.
pub async fn cookbook_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let recipes = recipe::list_recipes(&state.pool)
        .await
        .map_err(recipe_error_to_status)?;
    Ok(Html(templates::render_cookbook(&recipes)))
}

/// `POST /cookbook` — create a recipe, then redirect back to the page.
pub async fn submit_recipe(State(state): State<AppState>, Form(form): Form<RecipeForm>) -> Result<Redirect, StatusCode> {
    match form.into_new_recipe() {
        Some(new_recipe) => {
            recipe::create_recipe(&state.pool, &new_recipe)
                .await
                .map_err(recipe_error_to_status)?;
        }
        None => tracing::debug!("ignoring recipe submission without name or directions"),
    }
    Ok(Redirect::to("/cookbook"))
}
