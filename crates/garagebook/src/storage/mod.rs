//! Local store for garagebook.
//!
//! `LocalStore` is a `SQLite`-backed table of string-keyed slots with the
//! semantics of browser local storage: synchronous get/set of string values,
//! a set fully overwriting the previous value. The persistence adapter on
//! top of it serializes the whole customer collection to JSON under a single
//! slot key and reads it back once at startup.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::customer::Customer;
use crate::error::{Error, Result};

/// Slot key holding the serialized customer collection.
pub const DATA_KEY: &str = "auto-repair-data";

/// Slot key holding the dark-mode flag (`"true"` or `"false"`).
pub const THEME_KEY: &str = "darkMode";

/// String-keyed slot storage backed by `SQLite`.
#[derive(Debug)]
pub struct LocalStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl LocalStore {
    /// Open or create a local store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value of a slot; `None` if the key has never been set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a slot, fully overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (key, value) VALUES (?1, ?2)",
            (key, value),
        )?;
        debug!("Wrote slot {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Remove a slot. Returns `true` if the key existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM slots WHERE key = ?1", [key])?;
        Ok(affected > 0)
    }

    /// List every slot key, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM slots ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    /// Get store statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let slot_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StoreStats {
            slot_count,
            db_size_bytes,
        })
    }

    /// Read the persisted customer collection.
    ///
    /// An absent slot yields an empty collection; a present slot is parsed
    /// as a JSON array of customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the blob does not parse. No
    /// recovery path exists for a corrupt blob.
    pub fn load_customers(&self) -> Result<Vec<Customer>> {
        match self.get(DATA_KEY)? {
            None => Ok(Vec::new()),
            Some(blob) => {
                let customers: Vec<Customer> = serde_json::from_str(&blob)?;
                debug!("Loaded {} customers from {}", customers.len(), DATA_KEY);
                Ok(customers)
            }
        }
    }

    /// Persist the full customer collection as one JSON blob, fully
    /// overwriting the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        let blob = serde_json::to_string(customers)?;
        self.set(DATA_KEY, &blob)?;
        debug!("Saved {} customers to {}", customers.len(), DATA_KEY);
        Ok(())
    }
}

/// Statistics about the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of slots in the store.
    pub slot_count: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{JobDraft, VehicleDraft};
    use crate::store::ShopStore;

    fn create_test_store() -> LocalStore {
        LocalStore::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_open_in_memory() {
        assert!(LocalStore::open_in_memory().is_ok());
    }

    #[test]
    fn test_get_absent_key() {
        let store = create_test_store();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = create_test_store();
        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let store = create_test_store();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_remove() {
        let store = create_test_store();
        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert_eq!(store.get("k").unwrap(), None);
        assert!(!store.remove("k").unwrap());
    }

    #[test]
    fn test_keys_sorted() {
        let store = create_test_store();
        store.set("darkMode", "true").unwrap();
        store.set("auto-repair-data", "[]").unwrap();
        assert_eq!(
            store.keys().unwrap(),
            vec!["auto-repair-data".to_string(), "darkMode".to_string()]
        );
    }

    #[test]
    fn test_stats() {
        let store = create_test_store();
        assert_eq!(store.stats().unwrap().slot_count, 0);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.stats().unwrap().slot_count, 2);
    }

    #[test]
    fn test_load_customers_absent_slot_is_empty() {
        let store = create_test_store();
        assert!(store.load_customers().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = create_test_store();

        let mut shop = ShopStore::new();
        let id = shop.add_customer("Jane Doe", "555-1234").unwrap().id;
        shop.add_vehicle(
            id,
            VehicleDraft {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: "2020".to_string(),
                vin: "ABC123".to_string(),
            },
        )
        .unwrap();
        shop.add_job(
            id,
            JobDraft {
                description: "Oil change".to_string(),
                cost: "49.99".to_string(),
            },
        )
        .unwrap();

        store.save_customers(shop.customers()).unwrap();
        let loaded = store.load_customers().unwrap();
        assert_eq!(loaded, shop.customers());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let store = create_test_store();

        let mut shop = ShopStore::new();
        shop.add_customer("Jane Doe", "555-1234").unwrap();
        store.save_customers(shop.customers()).unwrap();

        shop.add_customer("John Roe", "555-5678").unwrap();
        store.save_customers(shop.customers()).unwrap();

        let loaded = store.load_customers().unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_load_customers_corrupt_blob_errors() {
        let store = create_test_store();
        store.set(DATA_KEY, "not json").unwrap();
        assert!(matches!(
            store.load_customers().unwrap_err(),
            Error::Json(_)
        ));
    }

    #[test]
    fn test_load_customers_tolerates_missing_lists() {
        let store = create_test_store();
        store
            .set(DATA_KEY, r#"[{"id": 1, "name": "Jane Doe", "phone": "555-1234"}]"#)
            .unwrap();
        let loaded = store.load_customers().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].vehicles.is_empty());
        assert!(loaded[0].jobs.is_empty());
    }

    #[test]
    fn test_open_file_based_persists_across_opens() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("garagebook_test_{}.db", std::process::id()));

        {
            let store = LocalStore::open(&db_path).unwrap();
            store.set("darkMode", "true").unwrap();
            assert_eq!(store.path(), db_path);
        }

        {
            let store = LocalStore::open(&db_path).unwrap();
            assert_eq!(store.get("darkMode").unwrap(), Some("true".to_string()));
        }

        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = std::env::temp_dir();
        let nested_path = temp_dir.join(format!(
            "garagebook_test_{}/nested/shop.db",
            std::process::id()
        ));

        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        let store = LocalStore::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(store);
        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent.parent().unwrap());
        }
    }

    #[test]
    fn test_unicode_slot_value() {
        let store = create_test_store();
        store.set("note", "Atención: frenos 🛠").unwrap();
        assert_eq!(
            store.get("note").unwrap(),
            Some("Atención: frenos 🛠".to_string())
        );
    }
}
