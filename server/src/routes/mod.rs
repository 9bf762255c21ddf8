//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the cookbook page, its form submission, the recipe
//! detail JSON the browser controller fetches, and the static assets (the
//! stylesheet under `/static`, the WASM bundle under `/pkg`).

pub mod cookbook;
pub mod recipes;


use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AssetDirs;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState, assets: &AssetDirs) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_cookbook))
        .route("/cookbook", get(cookbook::cookbook_page).post(cookbook::submit_recipe))
        .route("/recipes/{id}", get(recipes::recipe_detail))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(&assets.static_dir))
        .nest_service("/pkg", ServeDir::new(&assets.pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_cookbook() -> Redirect {
    Redirect::temporary("/cookbook")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
