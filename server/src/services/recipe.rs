//! Recipe service: listing, detail lookup, and creation.
//!
//! DESIGN
//! ======
//! A recipe row owns its ingredient rows. Ingredients are returned in
//! insertion order (`ingredients.id`), which is the order the form submitted
//! them in. Creation writes the recipe and all of its ingredients in one
//! transaction so a half-saved recipe is never visible.

#[cfg(test)]
#[path = "recipe_test.rs"]
mod recipe_test;

use cookbook_wire::{Ingredient, Recipe};
use sqlx::PgPool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row shown in the cookbook's recipe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
}

/// A recipe ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub directions: String,
    pub ingredients: Vec<Ingredient>,
}

/// Pair repeated form fields positionally. Extra entries in the longer
/// arrays are dropped.
#[must_use]
pub fn zip_ingredients(quantities: Vec<String>, units: Vec<String>, names: Vec<String>) -> Vec<Ingredient> {
    quantities
        .into_iter()
        .zip(units)
        .zip(names)
        .map(|((quantity, unit), name)| Ingredient { quantity, unit, name })
        .collect()
}

// =============================================================================
// QUERIES
// =============================================================================

/// List every recipe, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_recipes(pool: &PgPool) -> Result<Vec<RecipeSummary>, RecipeError> {
    let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM recipes ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| RecipeSummary { id, name })
        .collect())
}

/// Load a recipe with its ingredients.
///
/// # Errors
///
/// Returns [`RecipeError::NotFound`] if no recipe has `id`, or a database
/// error if a query fails.
pub async fn get_recipe(pool: &PgPool, id: i64) -> Result<Recipe, RecipeError> {
    let (name, directions) =
        sqlx::query_as::<_, (String, String)>("SELECT name, directions FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RecipeError::NotFound(id))?;

    let ingredients = sqlx::query_as::<_, (String, String, String)>(
        "SELECT quantity, unit, name FROM ingredients WHERE recipe_id = $1 ORDER BY id ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(quantity, unit, name)| Ingredient { quantity, unit, name })
    .collect();

    Ok(Recipe { name, ingredients, directions })
}

/// Insert a recipe and its ingredients. Returns the new recipe ID.
///
/// # Errors
///
/// Returns a database error if any insert fails; nothing is persisted then.
pub async fn create_recipe(pool: &PgPool, recipe: &NewRecipe) -> Result<i64, RecipeError> {
    let mut tx = pool.begin().await?;

    let (id,) = sqlx::query_as::<_, (i64,)>("INSERT INTO recipes (name, directions) VALUES ($1, $2) RETURNING id")
        .bind(&recipe.name)
        .bind(&recipe.directions)
        .fetch_one(&mut *tx)
        .await?;

    for ingredient in &recipe.ingredients {
        sqlx::query("INSERT INTO ingredients (recipe_id, quantity, unit, name) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&ingredient.quantity)
            .bind(&ingredient.unit)
            .bind(&ingredient.name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(recipe_id = id, ingredients = recipe.ingredients.len(), "recipe created");
    Ok(id)
}
