//! Data models for atlas.
//!
//! - [`Memory`]: a journal entry pinned to a place
//! - [`Coordinate`]: a validated latitude/longitude pair

mod coordinate;
mod memory;

pub use coordinate::Coordinate;
pub use memory::Memory;
