//! Persisted UI preferences.
//!
//! Preferences live in a small JSON object of string keys to booleans, so
//! new flags can be added without migrating the file.

use crate::error::PrefsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "energy-footprint";
const PREFS_FILE: &str = "prefs.json";

/// Key under which the AI section state is stored.
pub const AI_SECTION_COLLAPSED: &str = "aiSectionCollapsed";

/// Flat key-value store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the platform configuration directory.
    pub fn open_default() -> Result<Self, PrefsError> {
        let dir = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(PREFS_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored flags; an absent file is an empty store.
    pub fn load_all(&self) -> Result<BTreeMap<String, bool>, PrefsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    pub fn get(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        Ok(self.load_all()?.get(key).copied())
    }

    /// Writes one flag, keeping every other stored flag.
    pub fn set(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        let mut flags = self.load_all().unwrap_or_else(|err| {
            warn!(%err, "discarding unreadable preferences");
            BTreeMap::new()
        });
        flags.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&flags)?;
        std::fs::write(&self.path, json).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(key, value, path = %self.path.display(), "saved preference");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPrefs {
    pub ai_section_collapsed: bool,
}

impl UiPrefs {
    /// Reads preferences, falling back to defaults when the store is
    /// missing or unreadable.
    #[must_use]
    pub fn load(store: &PrefStore) -> Self {
        match store.get(AI_SECTION_COLLAPSED) {
            Ok(collapsed) => Self {
                ai_section_collapsed: collapsed.unwrap_or(false),
            },
            Err(err) => {
                warn!(%err, path = %store.path().display(), "using default preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &PrefStore) -> Result<(), PrefsError> {
        store.set(AI_SECTION_COLLAPSED, self.ai_section_collapsed)
    }

    /// Flips the AI section state and returns the new value.
    pub fn toggle_ai_section(&mut self) -> bool {
        self.ai_section_collapsed = !self.ai_section_collapsed;
        self.ai_section_collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.get(AI_SECTION_COLLAPSED).unwrap(), None);
        assert_eq!(UiPrefs::load(&store), UiPrefs::default());
    }

    #[test]
    fn toggle_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::new(dir.path().join("nested").join("prefs.json"));

        let mut prefs = UiPrefs::load(&store);
        assert!(prefs.toggle_ai_section());
        prefs.save(&store).unwrap();

        assert!(UiPrefs::load(&store).ai_section_collapsed);

        prefs.toggle_ai_section();
        prefs.save(&store).unwrap();
        assert!(!UiPrefs::load(&store).ai_section_collapsed);
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::new(dir.path().join("prefs.json"));

        store.set("showReference", true).unwrap();
        store.set(AI_SECTION_COLLAPSED, true).unwrap();

        let flags = store.load_all().unwrap();
        assert_eq!(flags.get("showReference"), Some(&true));
        assert_eq!(flags.get(AI_SECTION_COLLAPSED), Some(&true));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = PrefStore::new(path);

        assert!(store.load_all().is_err());
        assert_eq!(UiPrefs::load(&store), UiPrefs::default());

        // Writing replaces the unreadable file
        store.set(AI_SECTION_COLLAPSED, true).unwrap();
        assert!(UiPrefs::load(&store).ai_section_collapsed);
    }
}
