//! # Atlas - a personal map of memories
//!
//! Atlas pins memories to places on a world map. Each memory carries a
//! title, an optional date, a story and an optional photo URL, and is kept
//! in a single local JSON document.
//!
//! ## Features
//!
//! - **Local storage**: all memories live under one key in `.atlas/`
//! - **Terminal map**: browse, pin and delete memories in a TUI
//! - **HTML export**: a self-contained Leaflet page with every pin
//! - **Viewer**: a small read-only HTTP server for the same page
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new atlas
//! atlas init
//!
//! # Pin a memory
//! atlas add 48.8566 2.3522 --title "Paris" --date 2024-05-01 --story "Great trip"
//!
//! # List all memories
//! atlas list
//!
//! # Open the map
//! atlas tui
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`controller`]: Wires the store, the form and a map canvas together
//! - [`error`]: Error types and result aliases
//! - [`form`]: The new-memory form state machine
//! - [`map`]: Map view, pins and the Leaflet canvas
//! - [`model`]: Data models (Memory, Coordinate)
//! - [`render`]: Popup rendering and HTML escaping
//! - [`storage`]: Key/value persistence of the memory collection
//! - [`tui`]: Terminal user interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.atlas.yml` configuration files and project discovery.
pub mod config;

pub mod controller;

/// Error types and result aliases.
///
/// Defines `AtlasError` enum and `Result<T>` type alias.
pub mod error;

pub mod form;
pub mod logging;

/// Map view, pins and canvases.
pub mod map;

/// Data models for the atlas.
///
/// Includes `Memory` and `Coordinate`.
pub mod model;

pub mod render;

/// Local storage layer.
///
/// Reads and writes the memory collection as one JSON document.
pub mod storage;

/// Terminal user interface.
///
/// Interactive world map built with ratatui.
pub mod tui;

/// Read-only HTTP viewer.
pub mod web;
