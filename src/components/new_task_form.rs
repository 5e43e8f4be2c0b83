//! New Task Form Component
//!
//! Title and description inputs; builds a fresh task on submit.

use leptos::prelude::*;
use task_core::Task;
use uuid::Uuid;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm(on_create: Callback<Task>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let task = Task::new(Uuid::new_v4().to_string(), text, description.get_untracked().trim());
        on_create.run(task);
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
