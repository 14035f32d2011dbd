//! Room listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use room_store::{Room, RoomStore};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: RoomStore> {
    pub store: S,
}

/// GET /rooms — returns every room as a JSON array, oldest first.
pub async fn list<S: RoomStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = state.store.list_rooms().await?;
    tracing::debug!(count = rooms.len(), "listing rooms");
    Ok(Json(rooms))
}
