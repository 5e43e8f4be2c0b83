//! Task Collection
//!
//! Ordered task sequence with id-targeted mutations and derived counts.
//! Id-targeted operations silently do nothing when the id is absent.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskPatch};

/// Insertion-ordered collection of tasks (oldest first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.0.iter().find(|task| task.id == id)
    }

    /// Append to the end. Uniqueness of `task.id` is the caller's concern.
    pub fn push(&mut self, task: Task) {
        self.0.push(task);
    }

    /// Replace the task with the same id by `task`
    pub fn replace(&mut self, task: Task) {
        for existing in self.0.iter_mut().filter(|existing| existing.id == task.id) {
            *existing = task.clone();
        }
    }

    pub fn patch(&mut self, id: &str, patch: &TaskPatch) {
        self.for_each_matching(id, |task| task.apply(patch));
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|task| task.id != id);
    }

    pub fn toggle(&mut self, id: &str) {
        self.for_each_matching(id, |task| task.completed = !task.completed);
    }

    fn for_each_matching(&mut self, id: &str, mut f: impl FnMut(&mut Task)) {
        self.0.iter_mut().filter(|task| task.id == id).for_each(|task| f(task));
    }

    // ========================
    // Derived counts
    // ========================

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|task| task.completed).count()
    }

    /// Always `len() - completed_count()`
    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}
