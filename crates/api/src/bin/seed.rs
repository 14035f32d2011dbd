//! Inserts development fixtures into `DATABASE_URL`.
//!
//! Inserts the fixed fixture rooms plus `SEED_COUNT` generated rooms
//! (default 0). Every run inserts new rows.

use std::process::ExitCode;

use api::config::DatabaseConfig;
use room_store::{PostgresRoomStore, Result, RoomStore, seed};

async fn run(config: &DatabaseConfig, generated: usize) -> Result<(usize, i64)> {
    let store = PostgresRoomStore::connect(&config.url).await?;

    let mut rooms = seed::fixtures()?;
    rooms.extend(seed::sample(generated)?);
    let inserted = seed::load(&store, rooms).await?;

    let total = store.count_rooms().await?;
    store.pool().close().await;
    Ok((inserted.len(), total))
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    api::init_tracing("info");

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "refusing to seed");
            return ExitCode::FAILURE;
        }
    };

    let generated = match std::env::var("SEED_COUNT") {
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                tracing::error!(%value, "SEED_COUNT must be a non-negative integer");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => 0,
    };

    match run(&config, generated).await {
        Ok((inserted, total)) => {
            tracing::info!(inserted, total, "seed complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "seeding failed");
            ExitCode::FAILURE
        }
    }
}
