use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Synchronous string key-value storage, the only durability mechanism in
/// the app. Behind a trait so the store can be backed by the real data
/// directory or by an in-memory map in tests.
pub(crate) trait KvStore {
    /// Returns `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key is a file under the given directory.
pub(crate) struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub(crate) fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Shared in-memory store for tests. Clones share the same map, so a test
/// can hand one handle to a store and inspect (or reload from) the other.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    map: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
