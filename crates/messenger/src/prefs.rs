use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const KEY_BRAND_NAME: &str = "cm.brandName";
pub const KEY_LOGO_URL: &str = "cm.logoUrl";
pub const KEY_ACCENT_COLOR: &str = "cm.accentColor";
pub const KEY_WEBHOOK_URL: &str = "cm.webhookUrl";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to encode preference {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write preferences to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable string-keyed storage for widget preferences.
///
/// Values are stored JSON-encoded. Reads go through [`load`], which turns
/// a missing or undecodable value into the caller's fallback.
pub trait PreferenceStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: String) -> Result<(), PreferenceError>;

    /// Store several values at once. Either all of them land or none do.
    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), PreferenceError> {
        for (key, value) in entries {
            self.set_raw(&key, value)?;
        }
        Ok(())
    }
}

/// Read `key`, falling back silently when it is absent or corrupt.
pub fn load<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: PreferenceStore + ?Sized,
{
    let Some(raw) = store.get_raw(key) else {
        return fallback;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = key, error = %e, "Ignoring corrupt preference");
            fallback
        }
    }
}

/// JSON-encode `value` the way [`save`] stores it.
pub fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, PreferenceError> {
    serde_json::to_string(value).map_err(|source| PreferenceError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Encode and store `value` under `key`.
pub fn save<T, S>(store: &S, key: &str, value: &T) -> Result<(), PreferenceError>
where
    T: Serialize + ?Sized,
    S: PreferenceStore + ?Sized,
{
    store.set_raw(key, encode(key, value)?)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Session-only store. Everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), PreferenceError> {
        lock(&self.values).insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), PreferenceError> {
        lock(&self.values).extend(entries);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Store persisted as one JSON object on disk.
///
/// The whole file is rewritten on every write, and memory only changes once
/// the file has been written. A missing file starts empty; an unreadable one
/// is ignored with a warning and overwritten on the next save.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Preference file is corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read preference file, starting empty");
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let write_err = |source: std::io::Error| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };
        let contents = serde_json::to_string_pretty(values).map_err(|e| write_err(e.into()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, contents).map_err(write_err)
    }
}

impl PreferenceStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.set_many(vec![(key.to_string(), value)])
    }

    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), PreferenceError> {
        let mut values = lock(&self.values);
        let mut next = values.clone();
        next.extend(entries);
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}
