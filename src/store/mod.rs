//! File-backed prediction cache
//!
//! Persists the two cached prediction envelopes between CLI invocations, the
//! way the web app keeps them in browser local storage. The file is a flat
//! JSON object mapping storage keys to raw response text.

use agrovision_core::{Error, PredictionStore, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key-value store kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the file at `path`. It is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(&self.path, e)),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match self.read_text()? {
            Some(text) => serde_json::from_str(&text).map_err(|e| storage_error(&self.path, e)),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Entries to update before a write, and whether the file was unreadable.
    ///
    /// A file that is not a JSON object is discarded so writes can replace it.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        let Some(text) = self.read_text()? else {
            return Ok((BTreeMap::new(), false));
        };
        match serde_json::from_str(&text) {
            Ok(entries) => Ok((entries, false)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable cache file");
                Ok((BTreeMap::new(), true))
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
        }
        let text = serde_json::to_string_pretty(entries).map_err(|e| storage_error(&self.path, e))?;

        // Atomic replace via sibling temp file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error(&self.path, e))?;
        debug!(path = %self.path.display(), keys = entries.len(), "Wrote cache file");
        Ok(())
    }
}

fn storage_error(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Storage(format!("{}: {}", path.display(), e))
}

impl PredictionStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.read_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let (mut entries, corrupt) = self.read_for_write()?;
        if entries.remove(key).is_some() || corrupt {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
