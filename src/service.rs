// Task mutations and filtered views

use crate::filter::Filter;
use crate::models::{Counts, Task};
use crate::storage::StorageBackend;
use crate::store::Store;
use tracing::debug;

/// Mutation entry points and filtered projections over a [`Store`].
///
/// Every operation that changes the collection immediately saves it, and
/// none of them can fail from the caller's side: invalid input and unknown
/// ids are silent no-ops, and persistence trouble is absorbed by the store's
/// report-and-continue policy. Callers learn what happened from the return
/// value, or by re-reading state.
pub struct TaskService<B: StorageBackend> {
    store: Store<B>,
    filter: Filter,
}

impl<B: StorageBackend> TaskService<B> {
    /// Open a service over `backend`, loading any stored tasks.
    pub fn open(backend: B) -> Self {
        Self::new(Store::open(backend))
    }

    /// Wrap an already-opened store. The view mode starts at `All`.
    pub fn new(store: Store<B>) -> Self {
        Self {
            store,
            filter: Filter::All,
        }
    }

    /// Append a new task and persist.
    ///
    /// `text` is trimmed first; empty or whitespace-only input is ignored
    /// entirely (no task, no save) and `None` is returned. Otherwise the new
    /// task goes to the end of the collection with a fresh id.
    pub fn add(&mut self, text: &str, category: Option<u32>) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring add with empty text");
            return None;
        }

        self.store.tasks_mut().push(Task::new(text.to_string(), category));
        self.store.save();
        self.store.tasks().last()
    }

    /// Replace a task's text in place and persist.
    ///
    /// Unknown ids are a no-op. So is an edit whose trimmed text is empty:
    /// the task keeps its previous text, under the same silent rejection
    /// add applies. An edit can never blank out or destroy a task.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            debug!(id, "Ignoring edit with empty text");
            return false;
        }

        let Some(task) = self.store.tasks_mut().iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = new_text.to_string();
        self.store.save();
        true
    }

    /// Remove the task with `id`, keeping the order of the rest. Deleting an
    /// unknown (or already deleted) id is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let tasks = self.store.tasks_mut();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return false;
        }

        self.store.save();
        true
    }

    /// Flip a task's completion flag and persist. Toggling twice restores
    /// the original value.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let Some(task) = self.store.tasks_mut().iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.store.save();
        true
    }

    /// Re-tag a task; `None` clears the tag. The value is opaque here, range
    /// checking is the caller's business.
    pub fn set_category(&mut self, id: &str, category: Option<u32>) -> bool {
        let Some(task) = self.store.tasks_mut().iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.category = category;
        self.store.save();
        true
    }

    /// Drop every completed task, preserving the order of the remainder.
    /// Returns how many were removed; nothing removed means nothing saved.
    pub fn clear_completed(&mut self) -> usize {
        let tasks = self.store.tasks_mut();
        let before = tasks.len();
        tasks.retain(|t| !t.completed);
        let removed = before - tasks.len();
        if removed > 0 {
            self.store.save();
        }
        removed
    }

    /// Ordered projection of the collection under `filter`. Pure: never
    /// mutates, never saves.
    pub fn filtered_view(&self, filter: Filter) -> Vec<&Task> {
        self.store
            .tasks()
            .iter()
            .filter(|t| filter.admits(t.completed))
            .collect()
    }

    /// Projection under the current view mode.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filtered_view(self.filter)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The full collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// One-pass tally for footer-style displays.
    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for task in self.store.tasks() {
            counts.total += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
        }
        counts
    }

    /// Re-read the collection from storage, discarding unsaved in-memory
    /// state. The view mode is not persisted, so it resets to `All`.
    pub fn reload(&mut self) {
        self.store.load();
        self.filter = Filter::All;
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    /// Tear the service down to its store, e.g. to recover the backend.
    pub fn into_store(self) -> Store<B> {
        self.store
    }
}
