//! Task Item Component
//!
//! Single task row: completion checkbox, editable title, description,
//! creation date and delete action.

use chrono::Local;
use leptos::prelude::*;
use task_core::Task;

use super::DeleteConfirmButton;

/// A single task row
#[component]
pub fn TaskItem(
    task: Task,
    on_toggle: Callback<String>,
    /// Receives (id, new title)
    on_rename: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let Task { id, title, description, completed, created_at } = task;
    let created = created_at.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(title.clone());

    let toggle_id = id.clone();
    let rename_id = id.clone();
    let original_title = title;
    let commit = move || {
        let new_title = rename_target(editing.get_untracked(), &draft.get_untracked(), &original_title);
        set_editing.set(false);
        if let Some(new_title) = new_title {
            on_rename.run((rename_id.clone(), new_title));
        }
    };
    let commit_on_submit = commit.clone();

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| on_toggle.run(toggle_id.clone())
            />
            <div class="task-body">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <span
                            class="task-title"
                            title="Double-click to rename"
                            on:dblclick=move |_| set_editing.set(true)
                        >
                            {move || draft.get()}
                        </span>
                    }
                >
                    <form
                        class="task-rename-form"
                        on:submit={
                            let commit = commit_on_submit.clone();
                            move |ev: web_sys::SubmitEvent| {
                                ev.prevent_default();
                                commit();
                            }
                        }
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur={
                                let commit = commit.clone();
                                move |_| commit()
                            }
                        />
                    </form>
                </Show>
                <p class="task-description">{description}</p>
                <span class="task-created">{created}</span>
            </div>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=Callback::new(move |_: ()| on_delete.run(id.clone()))
            />
        </div>
    }
}

/// Title to rename to when a commit fires, if any.
///
/// Enter submits and then blurs the removed input, so a commit that arrives
/// after editing ended yields nothing.
fn rename_target(editing: bool, draft: &str, original: &str) -> Option<String> {
    let draft = draft.trim();
    (editing && !draft.is_empty() && draft != original).then(|| draft.to_string())
}
