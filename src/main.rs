mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

/// Log a startup failure and exit.
fn fatal(context: &str, error: &dyn std::fmt::Display) -> ! {
    tracing::error!(%error, "{context}");
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::ServerConfig::from_env().unwrap_or_else(|e| fatal("invalid configuration", &e));

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .unwrap_or_else(|e| fatal("database init failed", &e));

    let state = state::AppState::new(pool);
    let app = routes::app(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap_or_else(|e| fatal("failed to bind", &e));

    tracing::info!(port = config.port, "anima listening");
    if let Err(e) = axum::serve(listener, app).await {
        fatal("server failed", &e);
    }
}
