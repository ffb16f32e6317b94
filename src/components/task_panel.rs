//! Task Panel Component
//!
//! Search, status filter and CRUD over the signed-in user's tasks. The
//! visible list is a projection recomputed from the canonical collection
//! whenever the collection or a predicate changes.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskRow};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tasks::{filter_tasks, StatusFilter};

#[component]
pub fn TaskPanel() -> impl IntoView {
    let store = use_app_store();

    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal(StatusFilter::All);

    let visible_tasks = move || filter_tasks(&store.tasks().get(), &search.get(), status.get());

    view! {
        <div id="tasks" class="panel">
            <p class="panel-title">"Tasks"</p>

            <NewTaskForm />

            <div class="task-filters">
                <input
                    type="text"
                    class="task-search"
                    placeholder="Search tasks..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="filter-buttons">
                    {StatusFilter::ALL.iter().map(|option| {
                        let option = *option;
                        let is_active = move || status.get() == option;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active() { "filter-btn active" } else { "filter-btn" }
                                }
                                on:click=move |_| set_status.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="task-list">
                <For
                    each=visible_tasks
                    key=|task| {
                        // Key on every mutable field so a server-side replace re-renders
                        (
                            task.id.clone(),
                            task.completed,
                            task.title.clone(),
                            task.description.clone(),
                        )
                    }
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </div>

            <p class="task-count">
                {move || {
                    format!(
                        "{} of {} tasks shown",
                        visible_tasks().len(),
                        store.tasks().read().len(),
                    )
                }}
            </p>
        </div>
    }
}
