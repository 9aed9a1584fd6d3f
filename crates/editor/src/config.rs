//! Editor configuration, recent files, and session persistence.
//!
//! One JSON file holds everything the editor remembers between launches:
//! user settings, the recent-files list, and the last session's open tabs.
//!
//! ## File Location
//!
//! `<platform config dir>/plume/config.json` (e.g. `~/.config/plume/` on
//! Linux, `~/Library/Application Support/plume/` on macOS).
//!
//! ## Schema Version
//!
//! The file includes a schema version. If the version doesn't match the
//! current code, the config is discarded (graceful degradation to defaults).
//! Loading never fails: a missing, unreadable, or corrupt file also yields
//! defaults, because a broken config must not stop the editor from starting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current schema version for the config file.
///
/// Increment this when making breaking changes to the config format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the config directory.
const APP_NAME: &str = "plume";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Maximum number of entries kept in the recent-files list.
pub const MAX_RECENT_FILES: usize = 15;

/// How the status bar counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CharCountMode {
    #[default]
    WithSpaces,
    WithoutSpaces,
}

impl CharCountMode {
    /// The `include_whitespace` flag this mode translates to.
    pub fn include_whitespace(self) -> bool {
        matches!(self, CharCountMode::WithSpaces)
    }
}

/// One restorable tab: a file path to reopen.
///
/// Unsaved documents are not restored (their content lives nowhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTab {
    pub file_path: PathBuf,
}

/// The open tabs captured at exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub tabs: Vec<SessionTab>,
}

/// Persistent editor configuration.
///
/// Fields are plain data; nothing here reaches for ambient global state.
/// Components that need a setting receive it explicitly (for example the
/// status bar is handed `char_count_mode.include_whitespace()`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    pub schema_version: u32,
    pub recent_files: Vec<PathBuf>,
    pub theme: String,
    pub auto_save: bool,
    /// Seconds between auto-saves when `auto_save` is on.
    pub auto_save_interval: u64,
    pub restore_session: bool,
    pub show_line_numbers: bool,
    pub spell_check_enabled: bool,
    pub char_count_mode: CharCountMode,
    pub last_session: SessionData,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            recent_files: Vec::new(),
            theme: "midnight".to_string(),
            auto_save: false,
            auto_save_interval: 60,
            restore_session: true,
            show_line_numbers: false,
            spell_check_enabled: true,
            char_count_mode: CharCountMode::default(),
            last_session: SessionData::default(),
        }
    }
}

impl EditorConfig {
    /// Loads the config from a specific path.
    ///
    /// Missing file, unreadable file, parse failure, or a schema version
    /// mismatch all fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read config file {:?}: {}", path, e);
                return Self::default();
            }
        };

        let config: EditorConfig = match serde_json::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to parse config file {:?}: {}", path, e);
                return Self::default();
            }
        };

        if config.schema_version != SCHEMA_VERSION {
            return Self::default();
        }

        config
    }

    /// Loads from the default platform location, or defaults when the
    /// location cannot be determined.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Saves the config to a specific path.
    ///
    /// Creates parent directories as needed and uses atomic write (write to
    /// temp file, then rename) to prevent corruption.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Saves to the default platform location.
    pub fn save(&self) -> io::Result<()> {
        let path = default_config_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config file path")
        })?;
        self.save_to(&path)
    }

    // =========================================================================
    // Recent files
    // =========================================================================

    /// Records a file at the front of the recent list.
    ///
    /// An existing entry for the same path moves to the front instead of
    /// duplicating; the list is capped at [`MAX_RECENT_FILES`].
    pub fn add_recent_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    /// The recent files that still exist on disk, most recent first.
    ///
    /// Entries whose files have disappeared are pruned from the list.
    pub fn recent_files(&mut self) -> Vec<PathBuf> {
        self.recent_files.retain(|p| p.exists());
        self.recent_files.clone()
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Captures the open tabs for the next launch.
    pub fn save_session(&mut self, tabs: Vec<SessionTab>) {
        self.last_session = SessionData { tabs };
    }

    /// The tabs to reopen, or empty when session restore is off.
    pub fn restore_session(&self) -> Vec<SessionTab> {
        if self.restore_session {
            self.last_session.tabs.clone()
        } else {
            Vec::new()
        }
    }
}

/// Returns the path to the config file.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_NAME).join(CONFIG_FILENAME))
}

// =============================================================================
// Tests
// =============================================================================
