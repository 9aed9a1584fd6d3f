//! JSON-defined visual themes.
//!
//! A theme file is a small JSON document naming colors and a font; this
//! layer parses and catalogs them, it does not interpret color strings
//! (the GUI toolkit does that). Missing fields fall back to the built-in
//! default so a three-line theme file is valid.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Color assignments for the editor chrome. Values are uninterpreted color
/// strings (e.g. `"#1a1a1a"` or `"rgba(255,255,255,0.1)"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub window_bg: String,
    pub editor_bg: String,
    pub editor_fg: String,
    pub selection_bg: String,
    pub selection_fg: String,
    pub border: String,
    pub tab_active_bg: String,
    pub tab_inactive_bg: String,
    pub tab_text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            window_bg: "#1a1a1a".to_string(),
            editor_bg: "#0d0d0d".to_string(),
            editor_fg: "#e0e0e0".to_string(),
            selection_bg: "#404040".to_string(),
            selection_fg: "#ffffff".to_string(),
            border: "#2a2a2a".to_string(),
            tab_active_bg: "#2a2a2a".to_string(),
            tab_inactive_bg: "#1a1a1a".to_string(),
            tab_text: "#c0c0c0".to_string(),
        }
    }
}

/// Editor font request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    /// Point size.
    pub size: u32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "monospace".to_string(),
            size: 11,
        }
    }
}

/// One visual theme, as parsed from a theme JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub font: FontSpec,
}

impl Default for Theme {
    /// The built-in dark theme, always available even with no theme files.
    fn default() -> Self {
        Self {
            name: "Midnight".to_string(),
            colors: ThemeColors::default(),
            font: FontSpec::default(),
        }
    }
}

/// Default theme id, always present in a [`ThemeManager`].
const DEFAULT_THEME_ID: &str = "midnight";

/// Catalog of available themes, keyed by id (the theme file's stem).
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: BTreeMap<String, Theme>,
    current: String,
    /// Served when the catalog somehow lacks the current id.
    fallback: Theme,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    /// A manager holding only the built-in default theme.
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(DEFAULT_THEME_ID.to_string(), Theme::default());
        Self {
            themes,
            current: DEFAULT_THEME_ID.to_string(),
            fallback: Theme::default(),
        }
    }

    /// Loads every `*.json` theme in a directory on top of the built-in
    /// default.
    ///
    /// A missing directory yields just the default; an unparseable theme
    /// file is skipped with a note on stderr rather than failing the lot.
    pub fn load_dir(dir: &Path) -> Self {
        let mut manager = Self::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return manager,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<Theme>(&contents) {
                    Ok(theme) => {
                        manager.themes.insert(id.to_string(), theme);
                    }
                    Err(e) => eprintln!("Failed to parse theme {:?}: {}", path, e),
                },
                Err(e) => eprintln!("Failed to read theme {:?}: {}", path, e),
            }
        }

        manager
    }

    /// Looks up a theme by id.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// Switches the current theme. Returns false (and keeps the current
    /// theme) when the id is unknown.
    pub fn set_current(&mut self, id: &str) -> bool {
        if self.themes.contains_key(id) {
            self.current = id.to_string();
            true
        } else {
            false
        }
    }

    /// The active theme.
    ///
    /// `set_current` refuses unknown ids and the default is inserted at
    /// construction, so the lookup only misses if the catalog is tampered
    /// with; the built-in default covers that.
    pub fn current(&self) -> &Theme {
        self.themes.get(&self.current).unwrap_or(&self.fallback)
    }

    /// Id of the active theme.
    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// All available theme ids, sorted.
    pub fn theme_ids(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
