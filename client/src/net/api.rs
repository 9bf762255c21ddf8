//! Recipe detail fetching.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds only carry the [`RecipeSource`] seam and body decoding so
//! the detail loader can be driven by in-memory sources in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`]. The detail loader treats any
//! error as "leave the panel alone", so callers only log it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use cookbook_wire::Recipe;

/// Failure modes of a recipe fetch.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("recipe request failed: {0}")]
    Network(String),
    #[error("recipe request returned status {0}")]
    Status(u16),
    #[error("malformed recipe body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can resolve a recipe identifier into its details.
pub trait RecipeSource {
    /// Fetch the recipe named by `id` (the trailing segment of a recipe link).
    fn fetch_recipe(&self, id: &str) -> impl Future<Output = Result<Recipe, ApiError>>;
}

/// Endpoint for a recipe identifier, relative to the page origin.
#[must_use]
pub fn recipe_endpoint(id: &str) -> String {
    cookbook_wire::recipe_path(id)
}

/// Decode a `GET /recipes/{id}` response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a recipe object.
pub fn decode_recipe(body: &str) -> Result<Recipe, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// [`RecipeSource`] backed by `fetch` against the page origin.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRecipeSource;

#[cfg(feature = "hydrate")]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = recipe_endpoint(id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_recipe(&body)
    }
}
