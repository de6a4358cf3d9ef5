//! JSON file backing for the tracked IP list
//!
//! The whole collection is read and rewritten on every operation. Writes go
//! through a temporary file in the same directory and are renamed into place,
//! so readers never observe a half-written document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::{IpCollection, IpRecord};

pub const DEFAULT_STORE_PATH: &str = "ip_info.json";

#[cfg(unix)]
const STORE_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection.
    ///
    /// A missing file is an empty collection. A file that does not parse is
    /// reported as [`StoreError::Corrupt`] and left untouched.
    pub fn load(&self) -> Result<IpCollection, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store {} does not exist yet", self.path.display());
                return Ok(IpCollection::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let collection: IpCollection =
            serde_json::from_slice(&data).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} records from {}", collection.len(), self.path.display());
        Ok(collection)
    }

    /// Append one record and rewrite the file. Returns the new record count.
    ///
    /// An unparseable store is replaced, matching how `koppel` has always
    /// behaved; the loss is logged.
    pub fn append(&self, record: IpRecord) -> Result<usize, StoreError> {
        let mut collection = match self.load() {
            Ok(collection) => collection,
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!("Discarding unreadable store: {}", e);
                IpCollection::default()
            }
            Err(e) => return Err(e),
        };
        collection.push(record);
        self.save(&collection)?;
        Ok(collection.len())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&IpCollection::default())
    }

    /// Serialize `collection` with two-space indentation and atomically
    /// replace the store file with it.
    pub fn save(&self, collection: &IpCollection) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(collection).map_err(StoreError::Encode)?;
        self.write_atomic(&data).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote {} records to {}", collection.len(), self.path.display());
        Ok(())
    }

    fn write_atomic(&self, data: &[u8]) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(STORE_FILE_MODE))?;
        }

        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(ip: &str, city: &str) -> IpRecord {
        IpRecord {
            ip: ip.to_string(),
            city: city.to_string(),
            region: "R".to_string(),
            country: "C".to_string(),
            location: format!("{}, R, C", city),
            isp: "ISP".to_string(),
        }
    }

    fn temp_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("ip_info.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        let collection = store.load().unwrap();
        assert!(collection.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let (_dir, store) = temp_store();
        assert_eq!(store.append(record("1.1.1.1", "A")).unwrap(), 1);
        assert_eq!(store.append(record("2.2.2.2", "B")).unwrap(), 2);
        assert_eq!(store.append(record("1.1.1.1", "A")).unwrap(), 3);

        let collection = store.load().unwrap();
        let ips: Vec<&str> = collection.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2", "1.1.1.1"]);
        assert_eq!(collection.ips[0], collection.ips[2]);
    }

    #[test]
    fn test_file_is_pretty_printed() {
        let (_dir, store) = temp_store();
        store.append(record("1.1.1.1", "A")).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"ips\": [\n    {\n      \"ip\": \"1.1.1.1\","));
    }

    #[test]
    fn test_clear_writes_empty_array() {
        let (_dir, store) = temp_store();
        store.append(record("1.1.1.1", "A")).unwrap();
        store.clear().unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{\n  \"ips\": []\n}");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_creates_missing_file() {
        let (_dir, store) = temp_store();
        store.clear().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();

        match store.load() {
            Err(StoreError::Corrupt { path, .. }) => assert_eq!(path, store.path()),
            other => panic!("expected corrupt store, got {:?}", other),
        }
        // load must not touch the file
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn test_append_replaces_corrupt_file() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "garbage").unwrap();

        assert_eq!(store.append(record("3.3.3.3", "C")).unwrap(), 1);
        assert_eq!(store.load().unwrap().ips[0].ip, "3.3.3.3");
    }

    #[test]
    fn test_null_ips_from_older_files() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{\n  \"ips\": null\n}").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_store_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory can be stat'ed but not read as a file
        let store = JsonStore::new(dir.path());

        match store.load() {
            Err(StoreError::Read { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_append_aborts_on_read_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        match store.append(record("1.1.1.1", "A")) {
            Err(StoreError::Read { .. }) => {}
            other => panic!("expected read error, got {:?}", other),
        }
        assert!(store.path().is_dir());
        assert_eq!(fs::read_dir(store.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("missing").join("ip_info.json"));

        match store.clear() {
            Err(StoreError::Write { .. }) => {}
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        store.clear().unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, STORE_FILE_MODE);
    }
}
