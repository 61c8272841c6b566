//! The map canvas: where pins live and clicks turn into coordinates.
//!
//! - [`MapView`]: center/zoom, pan and the cell ↔ coordinate projection
//! - [`MapCanvas`]: the widget interface the controller drives
//! - [`LeafletMap`]: a canvas rendered as a Leaflet web page
//!
//! The terminal world map lives in [`crate::tui`].

mod canvas;
mod leaflet;
mod view;

pub use canvas::{MapCanvas, MapClick, Pin, PinHandle, PinLayer};
pub use leaflet::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, LeafletMap, TileLayer};
pub use view::{MAX_ZOOM, MIN_ZOOM, MapView};
