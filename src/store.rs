// Task collection ownership and the persistence boundary

use crate::models::Task;
use crate::storage::StorageBackend;
use eyre::{Context, Result};
use tracing::{debug, warn};

/// Fixed key the serialized collection lives under in the backend.
pub const TASKS_KEY: &str = "todo-tasks";

/// Owns the in-memory task collection and keeps it in sync with a backend.
///
/// `load` and `save` never fail from the caller's point of view: corrupt or
/// unreadable stored data resets the collection to empty, and a rejected
/// write leaves the in-memory state authoritative. Both conditions are
/// reported through `tracing` and nothing else. Stored data must never take
/// the embedding process down.
pub struct Store<B: StorageBackend> {
    backend: B,
    tasks: Vec<Task>,
}

impl<B: StorageBackend> Store<B> {
    /// Wrap `backend` and load whatever it currently holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            tasks: Vec::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the stored one.
    ///
    /// An absent key means a first run and yields an empty collection, not
    /// an error. Malformed bytes (or a failing backend read) also yield an
    /// empty collection, with a warning: recoverable corruption, by policy.
    pub fn load(&mut self) {
        self.tasks = match self.try_load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(key = TASKS_KEY, error = ?e, "Discarding unreadable task data");
                Vec::new()
            }
        };
        debug!(key = TASKS_KEY, count = self.tasks.len(), "Loaded task collection");
    }

    /// Write the collection under the fixed key, best effort.
    ///
    /// A rejected write (quota, I/O) is reported and otherwise ignored; the
    /// in-memory collection stays valid and a later save may still succeed.
    /// That save's data is lost, nothing more.
    pub fn save(&mut self) {
        match self.try_save() {
            Ok(()) => {
                debug!(key = TASKS_KEY, count = self.tasks.len(), "Saved task collection");
            }
            Err(e) => {
                warn!(key = TASKS_KEY, error = ?e, "Failed to persist task collection");
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Task>> {
        let Some(bytes) = self.backend.get(TASKS_KEY).context("Backend read failed")? else {
            return Ok(Vec::new());
        };
        serde_json::from_slice(&bytes).context("Stored bytes are not a task array")
    }

    fn try_save(&mut self) -> Result<()> {
        let bytes =
            serde_json::to_vec(&self.tasks).context("Failed to serialize task collection")?;
        self.backend.set(TASKS_KEY, &bytes).context("Backend write failed")
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The service is the only writer; everyone else gets read-only views.
    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    /// Give the backend back, e.g. to reopen the same in-memory store.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use eyre::eyre;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
            category: None,
        }
    }

    /// Backend that refuses reads and/or writes, for the failure policies.
    struct FlakyBackend {
        fail_reads: bool,
        fail_writes: bool,
    }

    impl StorageBackend for FlakyBackend {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            if self.fail_reads {
                Err(eyre!("disk on fire"))
            } else {
                Ok(None)
            }
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> Result<()> {
            if self.fail_writes {
                Err(eyre!("quota exceeded"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_open_empty_backend_starts_empty() {
        let store = Store::open(MemoryBackend::new());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = Store::open(MemoryBackend::new());
        store.tasks_mut().push(task("a", "Task A", false));
        store.tasks_mut().push(task("b", "Task B", true));
        store.save();

        store.load();
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0], task("a", "Task A", false));
        assert_eq!(store.tasks()[1], task("b", "Task B", true));
    }

    #[test]
    fn test_load_replaces_unsaved_state() {
        let mut store = Store::open(MemoryBackend::new());
        store.tasks_mut().push(task("a", "Task A", false));
        store.save();

        store.tasks_mut().push(task("b", "never saved", false));
        store.load();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, "a");
    }

    #[test]
    fn test_load_corrupt_bytes_resets_to_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(TASKS_KEY, b"not json").unwrap();

        let mut store = Store::open(backend);
        assert!(store.is_empty());

        // Still usable after the reset.
        store.tasks_mut().push(task("a", "Task A", false));
        store.save();
        store.load();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_non_array_resets_to_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(TASKS_KEY, br#"{"tasks":[]}"#).unwrap();

        let store = Store::open(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_record_missing_text_resets_to_empty() {
        // One bad record discards the whole collection; the policy is
        // coarse on purpose.
        let mut backend = MemoryBackend::new();
        backend
            .set(TASKS_KEY, br#"[{"id":"a","text":"ok"},{"id":"b"}]"#)
            .unwrap();

        let store = Store::open(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_applies_schema_defaults() {
        let mut backend = MemoryBackend::new();
        backend
            .set(TASKS_KEY, br#"[{"id":7,"text":"Legacy item","extra":"x"}]"#)
            .unwrap();

        let store = Store::open(backend);
        assert_eq!(store.len(), 1);
        let loaded = &store.tasks()[0];
        assert_eq!(loaded.id, "7");
        assert_eq!(loaded.text, "Legacy item");
        assert!(!loaded.completed);
        assert_eq!(loaded.category, None);
    }

    #[test]
    fn test_failed_read_resets_to_empty() {
        let store = Store::open(FlakyBackend {
            fail_reads: true,
            fail_writes: false,
        });
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_keeps_collection() {
        let mut store = Store::open(FlakyBackend {
            fail_reads: false,
            fail_writes: true,
        });
        store.tasks_mut().push(task("a", "Task A", false));

        store.save();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "Task A");
    }

    #[test]
    fn test_saved_bytes_are_a_json_array() {
        let mut store = Store::open(MemoryBackend::new());
        store.tasks_mut().push(task("a", "Task A", false));
        store.save();

        let backend = store.into_backend();
        let bytes = backend.get(TASKS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["completed"], false);
        assert_eq!(value[0]["category"], serde_json::Value::Null);
    }
}
