//! Task Row Component
//!
//! Single task with completion toggle, inline edit and delete. Every
//! mutation waits for the backend and then patches the store with the
//! server's representation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::UpdateTaskArgs};
use crate::components::DeleteConfirmButton;
use crate::models::Task;
use crate::store::{store_remove_task, store_replace_task, use_app_store};
use crate::toast::use_toasts;

/// Date part of an ISO timestamp
fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let id = StoredValue::new(task.id.clone());
    let completed = task.completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let created = short_date(&task.created_at).to_string();

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(task.title.clone());
    let (edit_description, set_edit_description) = signal(task.description.clone());

    let on_toggle = move |_| {
        let id = id.get_value();
        spawn_local(async move {
            let args = UpdateTaskArgs {
                title: None,
                description: None,
                completed: Some(!completed),
            };
            match api::tasks::update_task(&id, &args).await {
                Ok(updated) => store_replace_task(&store, updated),
                Err(e) => toasts.error(e),
            }
        });
    };

    let on_save = move |_| {
        let id = id.get_value();
        let title_value = edit_title.get();
        let description_value = edit_description.get();

        if title_value.trim().is_empty() {
            toasts.error("Task title is required");
            return;
        }

        spawn_local(async move {
            let args = UpdateTaskArgs {
                title: Some(&title_value),
                description: Some(&description_value),
                completed: None,
            };
            match api::tasks::update_task(&id, &args).await {
                Ok(updated) => {
                    store_replace_task(&store, updated);
                    set_editing.set(false);
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let on_delete = Callback::new(move |_| {
        let id = id.get_value();
        spawn_local(async move {
            match api::tasks::delete_task(&id).await {
                Ok(()) => store_remove_task(&store, &id),
                Err(e) => toasts.error(e),
            }
        });
    });

    view! {
        <div class="task-row">
            <Show
                when=move || editing.get()
                fallback=move || {
                    let title = title.clone();
                    let description = description.clone();
                    let created = created.clone();
                    view! {
                        <input type="checkbox" prop:checked=completed on:change=on_toggle />
                        <div class="task-body">
                            <span class=if completed { "task-title done" } else { "task-title" }>
                                {title}
                            </span>
                            <span class="task-description">{description}</span>
                            <span class="task-date">{created}</span>
                        </div>
                        <button class="task-edit-btn" on:click=move |_| set_editing.set(true)>
                            "Edit"
                        </button>
                        <DeleteConfirmButton button_class="task-delete-btn" on_confirm=on_delete />
                    }
                }
            >
                <div class="task-edit-form">
                    <input
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_save>"Save"</button>
                    <button class="btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}
