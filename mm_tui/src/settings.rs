//! Persisted client settings.
//!
//! A small JSON key-value file holding preferences that outlive a
//! session. Currently just the mute flag.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    pub muted: bool,
}

impl Settings {
    /// Settings file location: `MM_TUI_SETTINGS` if set, otherwise
    /// `.mm_tui.json` in the home directory (or the working directory
    /// when no home is known).
    #[must_use]
    pub fn path() -> PathBuf {
        if let Some(path) = env::var_os("MM_TUI_SETTINGS") {
            return PathBuf::from(path);
        }
        let mut base = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        base.push(".mm_tui.json");
        base
    }

    /// Load settings, falling back to defaults on any read or parse
    /// failure. A missing or corrupt file never blocks startup.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let path = env::temp_dir().join("mm_tui_settings_round_trip.json");
        let settings = Settings { muted: true };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        assert!(loaded.muted);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = env::temp_dir().join("mm_tui_settings_does_not_exist.json");
        let loaded = Settings::load_from(&path);
        assert!(!loaded.muted);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let path = env::temp_dir().join("mm_tui_settings_corrupt.json");
        fs::write(&path, "{not json").unwrap();
        let loaded = Settings::load_from(&path);
        assert!(!loaded.muted);
        fs::remove_file(&path).ok();
    }
}
