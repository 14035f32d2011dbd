use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, StoreError};

/// Primary key of a room.
///
/// Decodes straight from the `rooms.id` UUID column. The database assigns
/// it on insert; the in-memory store draws a random v4 UUID instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RoomId(Uuid);

impl RoomId {
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A persisted room.
///
/// Mirrors one row of the `rooms` table. `id` and `created_at` are assigned
/// by the store at insertion and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The insertable part of a room.
///
/// Construct with [`NewRoom::new`] so a blank name never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    name: String,
    description: Option<String>,
}

impl NewRoom {
    /// Creates a new room, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::InvalidRoom(
                "room name must not be empty".to_string(),
            ));
        }

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_rejects_blank_name() {
        assert!(matches!(
            NewRoom::new("", None),
            Err(StoreError::InvalidRoom(_))
        ));
        assert!(matches!(
            NewRoom::new("   ", Some("desc".to_string())),
            Err(StoreError::InvalidRoom(_))
        ));
    }

    #[test]
    fn new_room_keeps_fields() {
        let room = NewRoom::new("General", Some("Anything goes".to_string())).unwrap();
        assert_eq!(room.name(), "General");
        assert_eq!(room.description(), Some("Anything goes"));
    }

    #[test]
    fn room_ids_are_unique_and_print_as_uuids() {
        let a = RoomId::random();
        let b = RoomId::random();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a.to_string()).is_ok());
    }

    #[test]
    fn room_serializes_with_all_four_fields() {
        let room = Room {
            id: RoomId::random(),
            name: "General".to_string(),
            description: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&room).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(json["id"], room.id.to_string());
        assert_eq!(json["name"], "General");
        assert!(json["description"].is_null());
        let created_at = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
