//! Terminal user interface for the atlas.
//!
//! A world map drawn with ratatui's canvas. Memories show up as pins and the
//! selected pin's popup is shown in the side panel.
//!
//! ## Usage
//!
//! ```bash
//! atlas tui
//! ```
//!
//! ## Keybindings
//!
//! - `←↓↑→` / `hjkl`: Move the cursor (Shift or `HJKL` for larger steps)
//! - `Ctrl+←↓↑→`: Pan the map
//! - `+/-`: Zoom in/out
//! - `Enter` / `a`: New memory at the cursor
//! - Left click: New memory at the clicked spot, or select the clicked pin
//! - `Tab` / `n`: Select next pin
//! - `f`: Center on the selected pin
//! - `d`: Delete the selected memory
//! - `r`: Reload from storage
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod handlers;
pub mod map_widget;
pub mod theme;
mod ui;
mod ui_modals;
mod ui_utils;

pub use app::{App, InputMode, Message, run_tui};
pub use map_widget::TerminalMap;
