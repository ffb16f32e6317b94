//! New Task Form Component
//!
//! Creates a task after backend acknowledgment; empty titles are rejected
//! locally without any network call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::CreateTaskArgs};
use crate::store::{store_prepend_task, use_app_store};
use crate::toast::use_toasts;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let description_value = description.get();

        if title_value.trim().is_empty() {
            toasts.error("Task title is required");
            return;
        }

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &title_value,
                description: &description_value,
                completed: false,
            };
            match api::tasks::create_task(&args).await {
                Ok(task) => {
                    store_prepend_task(&store, task);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    toasts.success("Task created");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task title..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Add"</button>
        </form>
    }
}
