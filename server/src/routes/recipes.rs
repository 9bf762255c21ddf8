//! `GET /recipes/{id}`: recipe detail JSON for the browser controller.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cookbook_wire::Recipe;

use crate::services::recipe::{self, RecipeError};
use crate::state::AppState;

/// Parse a path segment as a recipe ID. Only unsigned decimal digits are
/// accepted; anything else, including overflow, is not a recipe.
pub(crate) fn parse_recipe_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok()
}

pub(crate) fn recipe_error_to_status(err: RecipeError) -> StatusCode {
    match err {
        RecipeError::NotFound(_) => StatusCode::NOT_FOUND,
        RecipeError::Database(e) => {
            tracing::error!(error = %e, "recipe query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /recipes/:id` — `{ name, ingredients: [{quantity, unit, name}], directions }`.
pub async fn recipe_detail(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<Json<Recipe>, StatusCode> {
    let id = parse_recipe_id(&raw_id).ok_or(StatusCode::NOT_FOUND)?;
    let recipe = recipe::get_recipe(&state.pool, id)
        .await
        .map_err(recipe_error_to_status)?;
    Ok(Json(recipe))
}
