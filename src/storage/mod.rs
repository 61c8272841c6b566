//! Local persistence for memories.
//!
//! All memories live in one JSON array stored under a single key:
//!
//! ```json
//! [
//!   {"id": 1714550400000, "lat": 48.85, "lng": 2.35, "title": "Paris",
//!    "date": "2024-05-01", "story": "Great trip", "photoUrl": ""}
//! ]
//! ```
//!
//! ## Components
//!
//! - [`KeyValueSlot`]: the key/value backend (file or in-memory)
//! - [`MemoryStore`]: list/append/remove over one slot key

mod slot;
mod store;

pub use slot::{FileSlot, InMemorySlot, KeyValueSlot};
pub use store::{DEFAULT_STORAGE_KEY, MemoryStore};
