use super::{ProductStore, Result};
use crate::error::StorageError;
use crate::model::Product;
use crate::query::{self, Snapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty catalog file.
    /// Existing data is left alone; returns whether a file was created.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            self.ensure_dir(parent)?;
        }
        self.write_all(&Snapshot::new())?;
        Ok(true)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| self.io_err(source))?;
        }
        Ok(())
    }

    fn io_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn serde_err(&self, source: serde_json::Error) -> StorageError {
        StorageError::Serialization {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProductStore for FileStore {
    fn read_all(&self) -> Result<Snapshot> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(|e| self.serde_err(e))?;

        let (snapshot, duplicates) = query::index_by_id(products);
        if !duplicates.is_empty() {
            warn!(
                path = %self.path.display(),
                ?duplicates,
                "duplicate product ids in data file, keeping the last entry"
            );
        }
        debug!(path = %self.path.display(), count = snapshot.len(), "catalog loaded");
        Ok(snapshot)
    }

    fn write_all(&self, snapshot: &Snapshot) -> Result<()> {
        let products = query::sorted(snapshot);
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&products)
        } else {
            serde_json::to_string(&products)
        };
        let content = encoded.map_err(|e| self.serde_err(e))?;

        // Atomic write: tmp file in the same directory, then rename over the target
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let tmp_path = dir.join(format!(".catalog-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| self.io_err(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_err(e));
        }

        debug!(path = %self.path.display(), count = products.len(), "catalog written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("products.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_unavailable() {
        let (_dir, store) = setup();
        assert!(matches!(store.read_all(), Err(StorageError::Io { .. })));
    }

    #[test]
    fn malformed_file_is_unavailable() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.read_all(),
            Err(StorageError::Serialization { .. })
        ));
    }

    #[test]
    fn init_creates_empty_catalog_once() {
        let (_dir, store) = setup();
        assert!(store.init().unwrap());
        assert!(store.read_all().unwrap().is_empty());

        let mut snap = Snapshot::new();
        snap.insert(1, Product::new("Oil", 1, "A", "01/01/2020", 2.0).with_id(1));
        store.write_all(&snap).unwrap();

        assert!(!store.init().unwrap());
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn writes_sorted_array() {
        let (_dir, store) = setup();
        let mut snap = Snapshot::new();
        for id in [3, 1, 2] {
            let code = format!("C{}", id);
            snap.insert(id, Product::new("Item", 1, code, "01/01/2020", 1.0).with_id(id));
        }
        store.write_all(&snap).unwrap();

        let raw: Vec<serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let ids: Vec<u64> = raw.iter().map(|v| v["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(raw[0]["code_value"], "C1");
    }
}
