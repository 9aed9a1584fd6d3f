//! plume: the headless core of a tabbed desktop text editor.
//!
//! This crate ties the analysis, search, and spell crates together into the
//! model a GUI front end drives: a [`Document`] per tab (text snapshot,
//! cursor, modified flag, file I/O, find/replace), an [`EditorConfig`]
//! (settings, recent files, last session) persisted as JSON in the platform
//! config directory, and JSON-defined visual [`Theme`]s.
//!
//! The GUI layer owns the event loop, widgets, and undo/redo; everything
//! here is synchronous and in-process. UI events call plain methods and get
//! plain values back.

mod config;
mod document;
mod theme;

pub use config::{
    default_config_path, CharCountMode, EditorConfig, SessionData, SessionTab, MAX_RECENT_FILES,
};
pub use document::Document;
pub use theme::{FontSpec, Theme, ThemeColors, ThemeManager};
