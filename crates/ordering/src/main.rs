use anyhow::{Context, Result};
use dotenv::dotenv;
use ordering::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("RUN_MODE")
        .map(|v| v == "development")
        .unwrap_or(true);
    let _guard = init_logger("ordering", is_dev, !is_dev);

    let config = Config::init().context("failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("failed to create database pool")?;

    if config.run_migrations {
        info!("🔄 Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        info!("✅ Migrations complete");
    }

    let state = AppState::new(pool, &config)
        .await
        .map_err(|e| anyhow::anyhow!("failed to build application state: {e}"))?;

    AppRouter::serve(config.port, state).await
}
