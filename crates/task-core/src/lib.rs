//! Task Board Core
//!
//! Framework-independent layer:
//! - task / list: entities and pure collection operations
//! - storage: key-value persistence abstraction
//! - store: task collection bound to a storage backend
//! - guard: unsaved-changes navigation predicate

mod config;
mod error;
mod guard;
mod list;
mod storage;
mod store;
mod task;


pub use config::{MalformedPolicy, StoreConfig, SETTINGS_KEY};
pub use error::{StorageError, StoreError, StoreResult};
pub use guard::{unsaved_changes_guard, CanDeactivate, Confirm, UNSAVED_CHANGES_MESSAGE};
pub use list::TaskList;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Hydration, TaskStore};
pub use task::{Task, TaskPatch};
