use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::AppResult;

pub const CART_KEY: &str = "cart_v2";
pub const ORDERS_KEY: &str = "orders_v2";
pub const PAYMENTS_KEY: &str = "payments_v2";

/// Durable string-keyed store. Injected so services never touch a global,
/// and tests can substitute an in-memory fake.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Single JSON file holding the whole key -> value map. Every `set` rewrites
/// the file wholesale; there is no partial update and no locking, so two
/// handles on the same file can race (single-profile scope, accepted).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// A missing or unreadable file yields an empty store rather than an
    /// error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, path = %path.display(), "store file corrupt, starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
