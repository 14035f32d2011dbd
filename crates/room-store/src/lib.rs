//! Persistence for rooms: the schema definition, the query layer, the
//! migration runner and the development seed loader.

pub mod error;
pub mod memory;
pub mod migrate;
pub mod postgres;
pub mod room;
pub mod seed;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryRoomStore;
pub use postgres::PostgresRoomStore;
pub use room::{NewRoom, Room, RoomId};
pub use store::{RoomStore, RoomStoreExt};
