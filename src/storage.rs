// Key-value byte storage backends

use eyre::{Context, Result, eyre};
use fs2::FileExt;
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistence medium for the task collection: a minimal key-value byte
/// store in the spirit of browser local storage.
///
/// `get` distinguishes "nothing stored yet" (`Ok(None)`) from a failed read.
/// Both calls are synchronous and make no durability promises beyond what
/// the medium itself offers.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Keys become file names in `FileBackend`, so they are restricted to short
/// identifier-like strings.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(eyre!("Storage key cannot be empty"));
    }
    if key.len() > 64 {
        return Err(eyre!("Storage key too long: {} (max 64 chars)", key));
    }
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(eyre!(
            "Invalid storage key: {} (must be alphanumeric with _/-)",
            key
        ));
    }
    Ok(())
}

/// In-memory backend for tests and ephemeral embedders. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// One file per key inside a directory: key `k` lives at `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create storage directory")?;
        debug!(dir = ?dir, "Opened file storage");
        Ok(Self { dir })
    }

    /// Open a backend in the per-user default location.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_location()?)
    }

    /// The platform data directory plus `taskpad/`.
    pub fn default_location() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("No platform data directory"))?;
        Ok(base.join("taskpad"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("Failed to read storage file"),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let path = self.path_for(key);

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .context("Failed to open storage file for writing")?;

        // Take the lock before truncating so another process never observes
        // a half-written value.
        file.lock_exclusive().context("Failed to acquire file lock")?;
        file.set_len(0)?;
        file.write_all(value)?;
        file.sync_all()?;

        // Lock is automatically released when file is dropped
        Ok(())
    }
}

/// SQLite-backed store: a single `kv(key, value)` table.
///
/// Heavier than `FileBackend`, but convenient when the embedder already
/// ships a database file and wants the tasks inside it.
#[derive(Debug)]
pub struct SqliteBackend {
    db: Connection,
}

impl SqliteBackend {
    /// Open or create the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create database directory")?;
        }
        let db = Connection::open(path).context("Failed to open SQLite database")?;
        Self::from_connection(db)
    }

    /// Fully in-memory database, mostly useful in tests.
    pub fn open_in_memory() -> Result<Self> {
        let db =
            Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        Self::from_connection(db)
    }

    /// Reuse an embedder-owned connection. The `kv` table is created if it
    /// does not exist; nothing else on the connection is touched.
    pub fn from_connection(db: Connection) -> Result<Self> {
        db.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );",
        )
        .context("Failed to create kv table")?;
        Ok(Self { db })
    }
}

impl StorageBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .db
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.db.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }
}
