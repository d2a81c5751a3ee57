mod app;
mod auth;
mod config;
mod db;
mod error;
mod extract;
mod products;
mod state;
mod store;
mod users;

#[cfg(test)]
mod testing;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "catalog_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.listen_addr();
    let (app_state, pool) = AppState::init(config).await?;

    match db::sync_schema(&pool).await {
        Ok(()) => tracing::info!("database schema synchronized"),
        Err(e) => tracing::warn!(error = %e, "schema sync failed; continuing"),
    }

    app::serve(app::build_app(app_state), &addr).await
}
