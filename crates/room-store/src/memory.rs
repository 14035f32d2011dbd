use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{NewRoom, Result, Room, RoomId, store::RoomStore};

/// In-memory room store for tests and benchmarks.
///
/// Keeps rooms in insertion order, which matches the ordering the
/// PostgreSQL store returns.
#[derive(Clone, Default)]
pub struct InMemoryRoomStore {
    rooms: Arc<RwLock<Vec<Room>>>,
}

impl InMemoryRoomStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all rooms.
    pub async fn clear(&self) {
        self.rooms.write().await.clear();
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        metrics::counter!("rooms_list_total").increment(1);
        Ok(self.rooms.read().await.clone())
    }

    async fn insert_room(&self, room: NewRoom) -> Result<Room> {
        let room = Room {
            id: RoomId::random(),
            name: room.name().to_string(),
            description: room.description().map(str::to_string),
            created_at: Utc::now(),
        };

        self.rooms.write().await.push(room.clone());
        Ok(room)
    }

    async fn count_rooms(&self) -> Result<i64> {
        Ok(self.rooms.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RoomStoreExt;

    fn new_room(name: &str) -> NewRoom {
        NewRoom::new(name, None).unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryRoomStore::new();
        assert!(store.list_rooms().await.unwrap().is_empty());
        assert_eq!(store.count_rooms().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let store = InMemoryRoomStore::new();
        let before = Utc::now();

        let room = store
            .insert_room(NewRoom::new("General", Some("Chat".to_string())).unwrap())
            .await
            .unwrap();

        assert_eq!(room.name, "General");
        assert_eq!(room.description.as_deref(), Some("Chat"));
        assert!(room.created_at >= before);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryRoomStore::new();
        store
            .insert_rooms(vec![new_room("a"), new_room("b"), new_room("c")])
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_rooms()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryRoomStore::new();
        let other = store.clone();
        store.insert_room(new_room("shared")).await.unwrap();
        assert_eq!(other.count_rooms().await.unwrap(), 1);

        other.clear().await;
        assert_eq!(store.count_rooms().await.unwrap(), 0);
    }
}
