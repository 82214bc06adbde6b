//! The storage boundary for room documents.
//!
//! Stores hold one versioned [`Room`] per room ID. Writes go through
//! [`RoomStore::compare_and_swap`], which only succeeds if nobody wrote the
//! room since it was loaded. That check is the whole concurrency story: the
//! round engine itself never locks anything.

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;
use crate::game::Room;
use crate::sync::Mutex;

/// A room as read from the store, together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Version of the stored document, bumped by every write.
    pub version: u64,
    /// The room document.
    pub room: Room,
}

/// Storage for room documents.
pub trait RoomStore {
    /// Loads the current snapshot of a room, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, room_id: &str) -> Result<Option<Snapshot>, StoreError>;

    /// Creates a room at version 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RoomExists`] if the ID is taken.
    fn insert(&self, room_id: &str, room: Room) -> Result<u64, StoreError>;

    /// Replaces the room if it is still at `expected_version`, returning the
    /// new version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if another write landed first, or
    /// [`StoreError::RoomNotFound`] if the room does not exist.
    fn compare_and_swap(
        &self,
        room_id: &str,
        expected_version: u64,
        room: Room,
    ) -> Result<u64, StoreError>;
}

impl<S: RoomStore + ?Sized> RoomStore for &S {
    fn load(&self, room_id: &str) -> Result<Option<Snapshot>, StoreError> {
        (**self).load(room_id)
    }

    fn insert(&self, room_id: &str, room: Room) -> Result<u64, StoreError> {
        (**self).insert(room_id, room)
    }

    fn compare_and_swap(
        &self,
        room_id: &str,
        expected_version: u64,
        room: Room,
    ) -> Result<u64, StoreError> {
        (**self).compare_and_swap(room_id, expected_version, room)
    }
}

/// An in-process [`RoomStore`].
#[derive(Debug)]
pub struct MemoryStore {
    rooms: Mutex<HashMap<String, Snapshot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of rooms stored.
    pub fn len(&self) -> usize {
        self.rooms.lock().len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rooms.lock().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomStore for MemoryStore {
    fn load(&self, room_id: &str) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.rooms.lock().get(room_id).cloned())
    }

    fn insert(&self, room_id: &str, room: Room) -> Result<u64, StoreError> {
        let mut rooms = self.rooms.lock();
        if rooms.contains_key(room_id) {
            return Err(StoreError::RoomExists);
        }
        rooms.insert(room_id.to_string(), Snapshot { version: 1, room });
        drop(rooms);
        Ok(1)
    }

    fn compare_and_swap(
        &self,
        room_id: &str,
        expected_version: u64,
        room: Room,
    ) -> Result<u64, StoreError> {
        let mut rooms = self.rooms.lock();
        let stored = rooms.get_mut(room_id).ok_or(StoreError::RoomNotFound)?;
        if stored.version != expected_version {
            return Err(StoreError::Conflict {
                expected: expected_version,
                found: stored.version,
            });
        }

        stored.version += 1;
        stored.room = room;
        let version = stored.version;
        drop(rooms);
        Ok(version)
    }
}
