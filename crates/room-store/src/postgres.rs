use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{NewRoom, Result, Room, RoomId, store::RoomStore};

/// Pool settings shared by the server and the tooling binaries.
pub fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
}

/// PostgreSQL-backed room store.
#[derive(Clone)]
pub struct PostgresRoomStore {
    pool: PgPool,
}

impl PostgresRoomStore {
    /// Creates a new PostgreSQL room store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects eagerly, failing if the database cannot be reached.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = pool_options().connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Builds a pool that only opens connections when a query needs one.
    ///
    /// Construction succeeds even while the database is down; queries then
    /// fail with [`crate::StoreError::Unavailable`].
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = pool_options().connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations against this store's pool.
    pub async fn run_migrations(&self) -> Result<()> {
        crate::migrate::run(&self.pool).await
    }

    fn row_to_room(row: PgRow) -> Result<Room> {
        Ok(Room {
            id: row.try_get::<RoomId, _>("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}

#[async_trait]
impl RoomStore for PostgresRoomStore {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let start = Instant::now();
        metrics::counter!("rooms_list_total").increment(1);

        let rows = sqlx::query(
            r#"
            SELECT id, name, description, created_at
            FROM rooms
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to list rooms"))?;

        metrics::histogram!("rooms_list_duration_seconds").record(start.elapsed().as_secs_f64());
        tracing::debug!(count = rows.len(), "listed rooms");

        rows.into_iter().map(Self::row_to_room).collect()
    }

    async fn insert_room(&self, room: NewRoom) -> Result<Room> {
        let row = sqlx::query(
            r#"
            INSERT INTO rooms (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(room.name())
        .bind(room.description())
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_room(row)
    }

    async fn count_rooms(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
