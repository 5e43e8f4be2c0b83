//! Unsaved Changes
//!
//! Dirty flag owned by the task list view. Set by every mutation made
//! from the view, cleared only by a successful save.

use leptos::prelude::*;
use task_core::{CanDeactivate, KeyValueStorage, StoreResult};

use crate::service::TaskService;

#[derive(Clone, Copy)]
pub struct UnsavedChanges {
    dirty: RwSignal<bool>,
    /// Off under auto-save, where mutations are already persisted
    tracking: bool,
}

impl UnsavedChanges {
    pub fn new(auto_save: bool) -> Self {
        Self {
            dirty: RwSignal::new(false),
            tracking: !auto_save,
        }
    }

    /// Tracked read for the view
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_changed(&self) {
        if self.tracking {
            self.dirty.set(true);
        }
    }

    /// Save through `service`; the flag stays set if the save fails
    pub fn save<S: KeyValueStorage + Send + Sync + 'static>(&self, service: &TaskService<S>) -> StoreResult<()> {
        service.save()?;
        self.dirty.set(false);
        Ok(())
    }
}

impl CanDeactivate for UnsavedChanges {
    fn can_deactivate(&self) -> bool {
        !self.dirty.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{FullStorage, SharedStorage};
    use task_core::{StoreConfig, Task, TaskStore};

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_starts_clean() {
        let _owner = owner();
        let unsaved = UnsavedChanges::new(false);
        assert!(!unsaved.is_dirty());
        assert!(unsaved.can_deactivate());
    }

    #[test]
    fn test_mutation_marks_dirty_and_save_clears() {
        let _owner = owner();
        let service = TaskService::new(TaskStore::new(SharedStorage::default(), StoreConfig::default()));
        let unsaved = UnsavedChanges::new(service.auto_save());

        service.add_task(Task::new("1", "A", ""));
        unsaved.mark_changed();
        assert!(unsaved.is_dirty());
        assert!(!unsaved.can_deactivate());

        unsaved.save(&service).unwrap();
        assert!(!unsaved.is_dirty());
        assert!(unsaved.can_deactivate());
    }

    #[test]
    fn test_failed_save_keeps_flag() {
        let _owner = owner();
        let service = TaskService::new(TaskStore::new(FullStorage, StoreConfig::default()));
        let unsaved = UnsavedChanges::new(service.auto_save());

        service.toggle_task_complete("missing");
        unsaved.mark_changed();

        assert!(unsaved.save(&service).is_err());
        assert!(unsaved.is_dirty());
    }

    #[test]
    fn test_auto_save_never_dirty() {
        let _owner = owner();
        let config = StoreConfig { auto_save: true, ..StoreConfig::default() };
        let service = TaskService::new(TaskStore::new(SharedStorage::default(), config));
        let unsaved = UnsavedChanges::new(service.auto_save());

        service.add_task(Task::new("1", "A", ""));
        unsaved.mark_changed();
        assert!(!unsaved.is_dirty());
    }
}
