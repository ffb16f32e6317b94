//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! the canonical collections; filter/pagination state stays local to the
//! components that own it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Product, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks for the signed-in user, newest first
    pub tasks: Vec<Task>,
    /// Product catalog rows shown on the dashboard
    pub products: Vec<Product>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
// Mutations run only after the backend has acknowledged the call; there is
// no optimistic path.

/// Replace the whole task collection (profile load)
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Prepend a freshly created task so the newest renders first
pub fn store_prepend_task(store: &AppStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Replace a task wholesale by id with the server's representation
pub fn store_replace_task(store: &AppStore, updated: Task) {
    store.tasks().write().iter_mut()
        .find(|task| task.id == updated.id)
        .map(|task| *task = updated);
}

/// Remove a task by id (an absent id is a no-op)
pub fn store_remove_task(store: &AppStore, task_id: &str) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Replace the product catalog (dashboard load)
pub fn store_set_products(store: &AppStore, products: Vec<Product>) {
    *store.products().write() = products;
}

/// Drop every selected product row (local-only bulk delete)
pub fn store_remove_products(store: &AppStore, ids: &[u32]) {
    store.products().write().retain(|product| !ids.contains(&product.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            completed: false,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let store = Store::new(AppState::new());
        store_set_tasks(&store, vec![make_task("1", "old")]);

        store_prepend_task(&store, make_task("2", "Buy milk"));

        let tasks = store.tasks().read_untracked();
        assert_eq!(tasks[0].id, "2");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].id, "1");
    }

    #[test]
    fn test_replace_swaps_entry_wholesale() {
        let store = Store::new(AppState::new());
        store_set_tasks(&store, vec![make_task("1", "old title")]);

        let mut updated = make_task("1", "server title");
        updated.completed = true;
        updated.created_at = "2025-07-13T10:00:00.000Z".to_string();
        store_replace_task(&store, updated);

        let tasks = store.tasks().read_untracked();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "server title");
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].created_at, "2025-07-13T10:00:00.000Z");
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let store = Store::new(AppState::new());
        store_set_tasks(&store, vec![make_task("1", "a"), make_task("2", "b")]);

        store_remove_task(&store, "missing");
        assert_eq!(store.tasks().read_untracked().len(), 2);

        store_remove_task(&store, "1");
        let tasks = store.tasks().read_untracked();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
    }
}
