// Taskpad - embeddable task list core with pluggable key-value persistence

pub mod filter;
pub mod models;
pub mod service;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use filter::Filter;
pub use models::{Counts, Task};
pub use service::TaskService;
pub use storage::{FileBackend, MemoryBackend, SqliteBackend, StorageBackend};
pub use store::{Store, TASKS_KEY};

// Re-export rusqlite so embedders can hand us their own connection
pub use rusqlite;
