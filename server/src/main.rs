mod config;
mod db;
mod logging;
mod routes;
mod services;
mod state;
mod templates;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();
    logging::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");
    let state = state::AppState::new(pool);

    let app = routes::app(state, &config.assets);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "cookbook listening");
    axum::serve(listener, app).await.expect("server failed");
}
