//! Development fixtures.
//!
//! Seeding is not idempotent: every call inserts new rows.

use crate::{NewRoom, Result, Room, store::RoomStore, store::RoomStoreExt};

const FIXTURES: &[(&str, Option<&str>)] = &[
    ("General", Some("Open discussion for everyone")),
    ("Announcements", Some("Release notes and team news")),
    ("Random", None),
    ("Support", Some("Questions about the product")),
    ("Off-topic", None),
];

/// The fixed set of sample rooms.
pub fn fixtures() -> Result<Vec<NewRoom>> {
    from_entries(FIXTURES)
}

/// Builds rooms from `(name, description)` pairs, failing on the first
/// invalid entry.
pub fn from_entries(entries: &[(&str, Option<&str>)]) -> Result<Vec<NewRoom>> {
    entries
        .iter()
        .map(|(name, description)| NewRoom::new(*name, description.map(str::to_string)))
        .collect()
}

/// Generates `count` numbered rooms; every other room has a description.
pub fn sample(count: usize) -> Result<Vec<NewRoom>> {
    (1..=count)
        .map(|n| {
            let description = (n % 2 == 1).then(|| format!("Sample room number {n}"));
            NewRoom::new(format!("Room {n}"), description)
        })
        .collect()
}

/// Inserts `rooms` into `store` and returns the stored rows.
pub async fn load<S: RoomStore + ?Sized>(store: &S, rooms: Vec<NewRoom>) -> Result<Vec<Room>> {
    let requested = rooms.len();
    let inserted = store.insert_rooms(rooms).await?;
    tracing::info!(requested, inserted = inserted.len(), "seeded rooms");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryRoomStore, StoreError};

    #[test]
    fn fixtures_are_all_valid() {
        let rooms = fixtures().unwrap();
        assert_eq!(rooms.len(), FIXTURES.len());
        assert!(rooms.iter().all(|r| !r.name().is_empty()));
    }

    #[test]
    fn sample_generates_requested_count() {
        let rooms = sample(4).unwrap();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].name(), "Room 1");
        assert!(rooms[0].description().is_some());
        assert!(rooms[1].description().is_none());
    }

    #[test]
    fn invalid_entry_is_reported() {
        let result = from_entries(&[("Lobby", None), ("  ", Some("blank name"))]);
        assert!(matches!(result, Err(StoreError::InvalidRoom(_))));
    }

    #[test]
    fn sample_zero_is_empty() {
        assert!(sample(0).unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_is_not_idempotent() {
        let store = InMemoryRoomStore::new();

        load(&store, fixtures().unwrap()).await.unwrap();
        load(&store, fixtures().unwrap()).await.unwrap();

        assert_eq!(
            store.count_rooms().await.unwrap(),
            2 * FIXTURES.len() as i64
        );
    }
}
