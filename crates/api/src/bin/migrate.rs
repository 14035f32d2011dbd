//! Applies pending schema migrations to `DATABASE_URL`.
//!
//! Creates the database first if it does not exist. Safe to run repeatedly.

use std::process::ExitCode;

use api::config::DatabaseConfig;
use room_store::{PostgresRoomStore, Result, migrate};

async fn run(config: &DatabaseConfig) -> Result<usize> {
    if migrate::ensure_database(&config.url).await? {
        tracing::info!("created database");
    }

    let store = PostgresRoomStore::connect(&config.url).await?;
    store.run_migrations().await?;

    let applied = migrate::applied_versions(store.pool()).await?;
    store.pool().close().await;
    Ok(applied.len())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    api::init_tracing("info");

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "refusing to migrate");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(applied) => {
            tracing::info!(applied, "database schema is up to date");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "migration failed");
            ExitCode::FAILURE
        }
    }
}
