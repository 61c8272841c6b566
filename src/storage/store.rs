use super::slot::KeyValueSlot;
use crate::{error::Result, model::Memory};
use chrono::Utc;
use std::cell::Cell;
use std::collections::HashSet;

/// Default slot key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "sentimentalAtlasMemories";

/// The ordered collection of memories, kept as one JSON array in a slot.
///
/// Every mutation reads the current array, changes it and writes the whole
/// array back. There is no cross-process locking: two writers racing on the
/// same slot may drop each other's entries.
pub struct MemoryStore<S: KeyValueSlot> {
    slot: S,
    key: String,
    last_id: Cell<i64>,
}

impl<S: KeyValueSlot> MemoryStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
            last_id: Cell::new(0),
        }
    }

    /// All stored memories in insertion order.
    ///
    /// A missing, unreadable or malformed slot reads as an empty collection.
    pub fn list(&self) -> Vec<Memory> {
        let raw = match self.slot.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read memories, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Memory>>(&raw) {
            Ok(memories) => {
                tracing::debug!(key = %self.key, count = memories.len(), "Loaded memories");
                memories
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored memories are not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<Memory> {
        self.list().into_iter().find(|m| m.id == id)
    }

    pub fn append(&self, memory: Memory) -> Result<()> {
        tracing::info!(id = memory.id, title = %memory.title, "Appending memory");
        self.bump_last_id(memory.id);

        let mut memories = self.list();
        memories.push(memory);
        self.save(&memories)
    }

    /// Drops every memory with `id`. Returns how many were removed; unknown ids
    /// remove nothing and are not an error.
    pub fn remove(&self, id: i64) -> Result<usize> {
        let mut memories = self.list();
        let before = memories.len();
        memories.retain(|m| m.id != id);
        let removed = before - memories.len();

        tracing::info!(id, removed, "Removing memory");
        self.save(&memories)?;
        Ok(removed)
    }

    /// A fresh id: the creation time in milliseconds, pushed past every id
    /// this store has handed out or holds.
    pub fn next_id(&self) -> i64 {
        let stored: HashSet<i64> = self.list().iter().map(|m| m.id).collect();
        let floor = stored
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(self.last_id.get());
        let now = Utc::now().timestamp_millis();

        let id = match floor.checked_add(1) {
            Some(next) => now.max(next),
            // Ids at i64::MAX only come from hand-edited files: take a free one
            None => (now..i64::MAX)
                .chain(1..now)
                .find(|id| !stored.contains(id) && *id != self.last_id.get())
                .unwrap_or(now),
        };
        self.last_id.set(id.max(self.last_id.get()));
        id
    }

    fn bump_last_id(&self, id: i64) {
        if id > self.last_id.get() {
            self.last_id.set(id);
        }
    }

    fn save(&self, memories: &[Memory]) -> Result<()> {
        let content = serde_json::to_string(memories)?;
        self.slot.write(&self.key, &content)
    }
}
