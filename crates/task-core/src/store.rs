//! Task Store
//!
//! Single source of truth for the task collection. Mutations only touch
//! memory; persistence happens on an explicit `save()`.

use log::{debug, info, warn};

use crate::config::{MalformedPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::list::TaskList;
use crate::storage::KeyValueStorage;
use crate::task::{Task, TaskPatch};

/// Result of loading the persisted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Nothing stored yet
    Empty,
    /// Stored list loaded with this many tasks
    Restored(usize),
    /// Stored data did not parse and was dropped
    Discarded,
}

/// Task collection bound to a key-value storage backend
#[derive(Debug)]
pub struct TaskStore<S> {
    tasks: TaskList,
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Create an empty store without touching storage
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self {
            tasks: TaskList::new(),
            storage,
            config,
        }
    }

    /// Create a store and hydrate it from storage
    pub fn open(storage: S, config: StoreConfig) -> StoreResult<(Self, Hydration)> {
        let mut store = Self::new(storage, config);
        let hydration = store.initialize()?;
        Ok((store, hydration))
    }

    /// Replace the collection with the persisted one, if any
    pub fn initialize(&mut self) -> StoreResult<Hydration> {
        let key = &self.config.storage_key;
        let Some(raw) = self.storage.get(key)? else {
            self.tasks = TaskList::new();
            info!("no saved tasks under '{}'", key);
            return Ok(Hydration::Empty);
        };

        match serde_json::from_str::<TaskList>(&raw) {
            Ok(tasks) => {
                info!("loaded {} tasks from '{}'", tasks.len(), key);
                let count = tasks.len();
                self.tasks = tasks;
                Ok(Hydration::Restored(count))
            }
            Err(source) => match self.config.on_malformed {
                MalformedPolicy::Reset => {
                    warn!("discarding malformed tasks under '{}': {}", key, source);
                    self.tasks = TaskList::new();
                    Ok(Hydration::Discarded)
                }
                MalformedPolicy::Fail => Err(StoreError::MalformedData {
                    key: key.clone(),
                    source,
                }),
            },
        }
    }

    /// Write the whole collection, overwriting the previous value
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.tasks).map_err(StoreError::Serialize)?;
        self.storage.set(&self.config.storage_key, &json)?;
        info!("saved {} tasks to '{}'", self.tasks.len(), self.config.storage_key);
        Ok(())
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_task(&mut self, task: Task) {
        debug!("add task {}", task.id);
        self.tasks.push(task);
    }

    pub fn update_task(&mut self, task: Task) {
        debug!("update task {}", task.id);
        self.tasks.replace(task);
    }

    pub fn partial_update_task(&mut self, id: &str, patch: &TaskPatch) {
        debug!("patch task {}", id);
        self.tasks.patch(id, patch);
    }

    pub fn delete_task(&mut self, id: &str) {
        debug!("delete task {}", id);
        self.tasks.remove(id);
    }

    pub fn toggle_task_complete(&mut self, id: &str) {
        debug!("toggle task {}", id);
        self.tasks.toggle(id);
    }

    // ========================
    // Accessors
    // ========================

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.active_count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
