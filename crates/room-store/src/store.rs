use async_trait::async_trait;

use crate::{NewRoom, Result, Room};

/// Query layer for rooms.
///
/// Implementations must be thread-safe (Send + Sync); handlers share a
/// single store across concurrent requests.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Returns every room, oldest first.
    ///
    /// An empty table yields an empty vector, not an error.
    async fn list_rooms(&self) -> Result<Vec<Room>>;

    /// Inserts a room, letting the store assign its ID and creation time.
    async fn insert_room(&self, room: NewRoom) -> Result<Room>;

    /// Returns the number of stored rooms.
    async fn count_rooms(&self) -> Result<i64>;
}

/// Extension trait providing convenience methods for room stores.
#[async_trait]
pub trait RoomStoreExt: RoomStore {
    /// Inserts rooms one at a time, in order.
    ///
    /// Stops at the first failure; rooms inserted before it stay inserted.
    async fn insert_rooms(&self, rooms: Vec<NewRoom>) -> Result<Vec<Room>> {
        let mut inserted = Vec::with_capacity(rooms.len());
        for room in rooms {
            inserted.push(self.insert_room(room).await?);
        }
        Ok(inserted)
    }
}

impl<T: RoomStore + ?Sized> RoomStoreExt for T {}
