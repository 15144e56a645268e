use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;

const STORAGE_FILE: &str = "local_storage.json";

/// String key/value store persisted as a single JSON file.
///
/// Every write goes straight to disk so the file always reflects the last
/// completed `set`/`remove`. An in-memory variant has no backing file.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    entries: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl LocalStorage {
    /// Open the store in the default config directory (`~/.appshell`)
    pub fn new() -> Self {
        Self::open(default_config_dir().join(STORAGE_FILE))
    }

    /// Open the store backed by `path`. A missing or corrupt file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable local storage");
                BTreeMap::new()
            }
        };

        LocalStorage {
            entries,
            path: Some(path),
        }
    }

    /// Store with no backing file
    pub fn in_memory() -> Self {
        LocalStorage::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), value.into());
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// `~/.appshell`, falling back to `./.appshell` without a home directory
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}
