//! Task Service
//!
//! Reactive wrapper around the task store. Views read tasks and counts
//! through it and every mutation re-runs the memoized counts.

use leptos::prelude::*;
use log::{error, warn};
use task_core::{Hydration, KeyValueStorage, StoreConfig, StoreResult, Task, TaskPatch, TaskStore};

use crate::storage::BrowserStorage;

pub struct TaskService<S: 'static = BrowserStorage> {
    store: RwSignal<TaskStore<S>>,
    /// Receives auto-save failures
    on_save_error: StoredValue<Option<Callback<String>>>,
    pub total_count: Memo<usize>,
    pub completed_count: Memo<usize>,
    pub active_count: Memo<usize>,
}

impl<S: 'static> Clone for TaskService<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for TaskService<S> {}

impl TaskService<BrowserStorage> {
    /// Load settings and saved tasks from localStorage.
    ///
    /// The service is always returned; a failed load leaves it empty.
    pub fn open() -> (Self, StoreResult<Hydration>) {
        let config = StoreConfig::load(&BrowserStorage).unwrap_or_else(|e| {
            warn!("settings unavailable, using defaults: {}", e);
            StoreConfig::default()
        });
        let mut store = TaskStore::new(BrowserStorage, config);
        let hydration = store.initialize();
        (Self::new(store), hydration)
    }
}

impl<S: KeyValueStorage + Send + Sync + 'static> TaskService<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        let store = RwSignal::new(store);
        let total_count = Memo::new(move |_| store.with(|s| s.total_count()));
        let completed_count = Memo::new(move |_| store.with(|s| s.completed_count()));
        let active_count = Memo::new(move |_| total_count.get() - completed_count.get());
        Self {
            store,
            on_save_error: StoredValue::new(None),
            total_count,
            completed_count,
            active_count,
        }
    }

    /// Where auto-save failures are reported
    pub fn on_save_error(&self, callback: Callback<String>) {
        self.on_save_error.set_value(Some(callback));
    }

    pub fn auto_save(&self) -> bool {
        self.store.with_untracked(|s| s.config().auto_save)
    }

    /// Snapshot of the collection (tracked)
    pub fn tasks(&self) -> Vec<Task> {
        self.store.with(|s| s.tasks().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|s| s.is_empty())
    }

    pub fn add_task(&self, task: Task) {
        self.mutate(|s| s.add_task(task));
    }

    pub fn partial_update_task(&self, id: &str, patch: &TaskPatch) {
        self.mutate(|s| s.partial_update_task(id, patch));
    }

    pub fn delete_task(&self, id: &str) {
        self.mutate(|s| s.delete_task(id));
    }

    pub fn toggle_task_complete(&self, id: &str) {
        self.mutate(|s| s.toggle_task_complete(id));
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.with_untracked(|s| s.save())
    }

    /// Apply a mutation, persisting right away when auto-save is on
    fn mutate(&self, f: impl FnOnce(&mut TaskStore<S>)) {
        self.store.update(f);
        if !self.auto_save() {
            return;
        }
        if let Err(e) = self.save() {
            error!("auto-save failed: {}", e);
            let message = format!("Auto-save failed: {}", e);
            self.on_save_error.with_value(|callback| {
                if let Some(callback) = callback {
                    callback.run(message);
                }
            });
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use task_core::StorageError;

    /// Thread-safe in-memory storage shared between a service and the test
    #[derive(Clone, Default)]
    pub(crate) struct SharedStorage(Arc<Mutex<HashMap<String, String>>>);

    impl SharedStorage {
        pub(crate) fn raw(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key).cloned()
        }
    }

    impl KeyValueStorage for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Storage that rejects every write
    pub(crate) struct FullStorage;

    impl KeyValueStorage for FullStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write { key: key.to_string(), reason: "quota exceeded".to_string() })
        }
    }

    fn auto_save_config() -> StoreConfig {
        StoreConfig { auto_save: true, ..StoreConfig::default() }
    }

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_counts_follow_mutations() {
        let _owner = owner();
        let service = TaskService::new(TaskStore::new(SharedStorage::default(), StoreConfig::default()));

        service.add_task(Task::new("1", "A", ""));
        service.add_task(Task::new("2", "B", ""));
        service.toggle_task_complete("1");

        assert_eq!(service.total_count.get_untracked(), 2);
        assert_eq!(service.completed_count.get_untracked(), 1);
        assert_eq!(service.active_count.get_untracked(), 1);
    }

    #[test]
    fn test_explicit_save_mode_does_not_write_on_mutation() {
        let _owner = owner();
        let storage = SharedStorage::default();
        let service = TaskService::new(TaskStore::new(storage.clone(), StoreConfig::default()));

        service.add_task(Task::new("1", "A", ""));
        assert_eq!(storage.raw("tasks"), None);

        service.save().unwrap();
        assert!(storage.raw("tasks").is_some());
    }

    #[test]
    fn test_auto_save_writes_after_each_mutation() {
        let _owner = owner();
        let storage = SharedStorage::default();
        let service = TaskService::new(TaskStore::new(storage.clone(), auto_save_config()));
        assert_eq!(storage.raw("tasks"), None);

        service.add_task(Task::new("1", "A", ""));
        let (reloaded, _) = TaskStore::open(storage.clone(), StoreConfig::default()).unwrap();
        assert_eq!(reloaded.total_count(), 1);

        service.toggle_task_complete("1");
        let (reloaded, _) = TaskStore::open(storage.clone(), StoreConfig::default()).unwrap();
        assert_eq!(reloaded.completed_count(), 1);

        service.delete_task("1");
        assert_eq!(storage.raw("tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_auto_save_failure_reaches_callback() {
        let _owner = owner();
        let service = TaskService::new(TaskStore::new(FullStorage, auto_save_config()));
        let reported = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = reported.clone();
        service.on_save_error(Callback::new(move |message: String| {
            sink.lock().unwrap().push(message);
        }));

        service.add_task(Task::new("1", "A", ""));

        let reported = reported.lock().unwrap();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].starts_with("Auto-save failed"));
        assert_eq!(service.total_count.get_untracked(), 1);
    }
}
