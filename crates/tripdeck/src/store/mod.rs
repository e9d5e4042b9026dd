//! Key/value storage for tripdeck.
//!
//! A named-value store over `SQLite`: every value is a whole-collection JSON
//! snapshot written under a fixed key. Mutations always read the full
//! collection, transform it in memory, and write the full collection back,
//! so the last writer wins and there are no partial updates.
//!
//! Reads are deliberately infallible: a missing key, an unreadable row, or a
//! value that no longer parses as JSON all degrade to the caller-supplied
//! fallback. The fallback itself is never persisted.

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Storage keys for the persisted collections.
pub mod keys {
    /// The singleton traveler profile.
    pub const PROFILE: &str = "travel.profile";
    /// The ordered trip collection.
    pub const TRIPS: &str = "travel.trips";
    /// The append-only community post collection.
    pub const POSTS: &str = "travel.posts";
}

/// JSON key/value store backed by `SQLite`.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Store {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot
    /// be created.
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
        Self::initialize_schema(&conn)?;

        info!("Database opened at {}", path.display());
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

        Self::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<()> {
        for statement in schema::SCHEMA_STATEMENTS {
            conn.execute(statement, [])?;
        }
        Ok(())
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`, or `fallback` when unavailable.
    ///
    /// Missing keys, query failures, malformed JSON, and an explicitly stored
    /// `null` all yield `fallback` unchanged. Failures are logged at debug
    /// level only.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Failed to read key {key}: {err}");
                return fallback;
            }
        };

        let Some(raw) = raw else {
            return fallback;
        };

        // A stored literal null counts as absent, same as a value that no
        // longer parses.
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Null) => fallback,
            Ok(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                debug!("Malformed value under key {key}: {err}");
                fallback
            }),
            Err(err) => {
                debug!("Malformed JSON under key {key}: {err}");
                fallback
            }
        }
    }

    /// Store `value` under `key` as JSON, fully overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            (key, &json),
        )?;
        debug!("Wrote {} bytes under key {key}", json.len());
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&self, key: &str, raw: &str) {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                (key, raw),
            )
            .expect("raw write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> Store {
        Store::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_open_in_memory() {
        assert!(Store::open_in_memory().is_ok());
    }

    #[test]
    fn test_round_trip() {
        let store = create_test_store();
        let value = vec!["a".to_string(), "b".to_string()];

        store.set("test.key", &value).unwrap();
        let back: Vec<String> = store.get("test.key", Vec::new());
        assert_eq!(back, value);
    }

    #[test]
    fn test_round_trip_nested_value() {
        let store = create_test_store();
        let value = serde_json::json!({
            "name": "Ada",
            "tags": ["alpine", "coastal"],
            "budget": 1200.5,
        });

        store.set("test.nested", &value).unwrap();
        let back: serde_json::Value = store.get("test.nested", serde_json::Value::Null);
        assert_eq!(back, value);
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        let store = create_test_store();
        let value: Vec<String> = store.get("no.such.key", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_malformed_json_returns_fallback() {
        let store = create_test_store();
        store.set_raw("bad.key", "{not json at all");

        let value: Vec<String> = store.get("bad.key", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_wrong_shape_returns_fallback() {
        let store = create_test_store();
        store.set_raw("shape.key", r#"{"unexpected": true}"#);

        let value: Vec<String> = store.get("shape.key", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_stored_null_returns_fallback() {
        let store = create_test_store();
        store.set_raw("null.key", "null");

        let value: Option<String> = store.get("null.key", Some("fallback".to_string()));
        assert_eq!(value, Some("fallback".to_string()));
    }

    #[test]
    fn test_fallback_is_not_persisted() {
        let store = create_test_store();
        let _: Vec<String> = store.get("lazy.key", vec!["fallback".to_string()]);

        // A later read with a different fallback sees that one, not the first.
        let value: Vec<String> = store.get("lazy.key", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = create_test_store();
        store.set("test.key", &vec![1, 2, 3]).unwrap();
        store.set("test.key", &vec![9]).unwrap();

        let back: Vec<i32> = store.get("test.key", Vec::new());
        assert_eq!(back, vec![9]);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = create_test_store();
        store.set(keys::TRIPS, &vec!["trip".to_string()]).unwrap();

        let posts: Vec<String> = store.get(keys::POSTS, Vec::new());
        assert!(posts.is_empty());
        let trips: Vec<String> = store.get(keys::TRIPS, Vec::new());
        assert_eq!(trips.len(), 1);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = std::env::temp_dir();
        let nested_path = temp_dir.join(format!("tripdeck_test_{}/nested/travel.db", std::process::id()));

        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        let store = Store::open(&nested_path).unwrap();
        assert!(nested_path.exists());
        assert_eq!(store.path(), nested_path);

        drop(store);
        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent.parent().unwrap());
        }
    }

    #[test]
    fn test_open_file_based_round_trip() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("tripdeck_test_{}.db", std::process::id()));

        {
            let store = Store::open(&db_path).unwrap();
            store.set("persist.key", &42).unwrap();
        }

        let store = Store::open(&db_path).unwrap();
        let value: i32 = store.get("persist.key", 0);
        assert_eq!(value, 42);

        drop(store);
        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }
}
