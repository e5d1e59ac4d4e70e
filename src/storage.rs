//! Persistence for tab state.
//!
//! The full `{tabs, active_tab_id}` structure is serialized as JSON under the
//! fixed `tab-storage` key on every registry mutation and restored at
//! initialization. Storage is a collaborator behind [`StateStore`]; the crate
//! ships a file-backed store (one JSON file per key under the platform config
//! directory) and an in-memory store for tests. Missing or malformed state is
//! never an error for the engine — callers fall back to the default tab list.

use crate::tab::{Tab, TabId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Fixed key the tab state is stored under.
pub const TAB_STORAGE_KEY: &str = "tab-storage";

/// The persisted `{tabs, active_tab_id}` structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTabState {
    /// All tabs in render order; order survives reload.
    pub tabs: Vec<Tab>,
    /// Active tab id, if any.
    pub active_tab_id: Option<TabId>,
}

/// Typed storage error variants.
///
/// Store implementations return `anyhow::Result` for caller convenience;
/// these values coerce automatically and remain downcastable for callers
/// that want to match on the failure mode.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred reading or writing the state file.
    #[error("I/O error accessing tab state: {0}")]
    Io(#[from] std::io::Error),

    /// The stored state was not valid JSON for [`PersistedTabState`].
    #[error("JSON error in tab state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence collaborator for the registry.
pub trait StateStore {
    /// Load the state stored under `key`. `Ok(None)` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<PersistedTabState>>;

    /// Store `state` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, state: &PersistedTabState) -> Result<()>;
}

/// Shared-handle stores: lets a caller keep a handle to a store that a
/// registry owns (the registry takes a `Box<dyn StateStore>`).
impl<S: StateStore> StateStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn load(&self, key: &str) -> Result<Option<PersistedTabState>> {
        self.borrow().load(key)
    }

    fn save(&mut self, key: &str, state: &PersistedTabState) -> Result<()> {
        self.borrow_mut().save(key, state)
    }
}

/// File-backed store: one pretty-printed JSON file per key inside a base
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store keys as JSON files inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default base directory, under the platform config directory.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tab-strip")
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<PersistedTabState>> {
        let path = self.entry_path(key);
        if !path.exists() {
            log::debug!("no tab state file at {}", path.display());
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(StorageError::Io)
            .with_context(|| format!("failed to read tab state from {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let state = serde_json::from_str(&contents)
            .map_err(StorageError::Json)
            .with_context(|| format!("failed to parse tab state from {}", path.display()))?;
        Ok(Some(state))
    }

    fn save(&mut self, key: &str, state: &PersistedTabState) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(StorageError::Io)
            .with_context(|| format!("failed to create state directory {}", self.dir.display()))?;

        let path = self.entry_path(key);
        let contents = serde_json::to_string_pretty(state)
            .map_err(StorageError::Json)
            .context("failed to serialize tab state")?;
        std::fs::write(&path, contents)
            .map_err(StorageError::Io)
            .with_context(|| format!("failed to write tab state to {}", path.display()))?;

        log::debug!(
            "saved {} tabs to {}",
            state.tabs.len(),
            path.display()
        );
        Ok(())
    }
}

/// In-memory store for tests and embedders with their own persistence.
/// Values round-trip through JSON exactly like the file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store raw JSON under `key`; used to simulate corrupt state in tests.
    pub fn set_raw(&mut self, key: impl Into<String>, contents: impl Into<String>) {
        self.entries.insert(key.into(), contents.into());
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<PersistedTabState>> {
        let Some(contents) = self.entries.get(key) else {
            return Ok(None);
        };
        let state = serde_json::from_str(contents)
            .map_err(StorageError::Json)
            .with_context(|| format!("failed to parse tab state under key {key:?}"))?;
        Ok(Some(state))
    }

    fn save(&mut self, key: &str, state: &PersistedTabState) -> Result<()> {
        let contents = serde_json::to_string(state)
            .map_err(StorageError::Json)
            .context("failed to serialize tab state")?;
        self.entries.insert(key.to_string(), contents);
        Ok(())
    }
}
