//! Task List Page Component
//!
//! Lists tasks with their counts, and owns the unsaved-changes flag
//! the navigation guard consults.

use std::sync::Arc;

use leptos::prelude::*;
use log::error;
use task_core::{Task, TaskPatch};

use super::{NewTaskForm, TaskItem};
use crate::context::use_app_context;
use crate::models::Notice;
use crate::routes::Route;
use crate::unsaved::UnsavedChanges;

#[component]
pub fn TaskListPage() -> impl IntoView {
    let ctx = use_app_context();
    let service = ctx.service;

    let unsaved = UnsavedChanges::new(service.auto_save());
    ctx.navigator.set_deactivation_hook(Arc::new(unsaved));

    let add_task = Callback::new(move |task: Task| {
        service.add_task(task);
        unsaved.mark_changed();
    });
    let toggle_task = Callback::new(move |id: String| {
        service.toggle_task_complete(&id);
        unsaved.mark_changed();
    });
    let rename_task = Callback::new(move |(id, title): (String, String)| {
        service.partial_update_task(&id, &TaskPatch::default().title(title));
        unsaved.mark_changed();
    });
    let delete_task = Callback::new(move |id: String| {
        service.delete_task(&id);
        unsaved.mark_changed();
    });

    let save = move |_| match unsaved.save(&service) {
        Ok(()) => ctx.notify(Notice::success("Tasks saved")),
        Err(e) => {
            error!("save failed: {}", e);
            ctx.notify(Notice::error(format!("Save failed: {}", e)));
        }
    };

    view! {
        <section class="task-list">
            <h1>"Tasks"</h1>

            <div class="counts">
                <p class="count">"Total tasks: " {move || service.total_count.get()}</p>
                <p class="count">"Completed tasks: " {move || service.completed_count.get()}</p>
                <p class="count">"Active tasks: " {move || service.active_count.get()}</p>
            </div>

            <NewTaskForm on_create=add_task />

            <Show
                when=move || !service.is_empty()
                fallback=|| view! { <p class="empty-hint">"No tasks yet."</p> }
            >
                <For
                    each=move || { service.tasks().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(index, task)| row_key(*index, task)
                    children=move |(_, task)| view! {
                        <TaskItem
                            task=task
                            on_toggle=toggle_task
                            on_rename=rename_task
                            on_delete=delete_task
                        />
                    }
                />
            </Show>

            <div class="task-actions">
                <button class="save-btn" on:click=save>"Save"</button>
                <Show when=move || unsaved.is_dirty()>
                    <span class="unsaved-indicator">"Unsaved changes"</span>
                </Show>
                <button class="home-btn" on:click=move |_| {
                    ctx.navigator.navigate(Route::Home.path());
                }>
                    "Home"
                </button>
            </div>
        </section>
    }
}

/// Key for a rendered row.
///
/// Completion and title are included so edited rows re-render; the position
/// keeps rows with duplicate ids distinct.
fn row_key(index: usize, task: &Task) -> (usize, String, bool, String) {
    (index, task.id.clone(), task.completed, task.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_duplicate_tasks_get_distinct_keys() {
        let task = Task::new("dup", "Same", "");
        let keys: HashSet<_> = [task.clone(), task].iter().enumerate().map(|(i, t)| row_key(i, t)).collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_toggle_changes_key() {
        let mut task = Task::new("1", "A", "");
        let before = row_key(0, &task);
        task.completed = true;
        assert_ne!(row_key(0, &task), before);
    }
}
