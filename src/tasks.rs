//! Task Projection
//!
//! Derives the visible task list from the canonical collection plus the
//! ephemeral search/filter state.

use crate::models::Task;

/// Completion-status predicate for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Done,
}

impl StatusFilter {
    /// Filter choices in display order
    pub const ALL: &'static [StatusFilter] =
        &[StatusFilter::All, StatusFilter::Pending, StatusFilter::Done];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Done => "Done",
        }
    }

    fn matches(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !completed,
            StatusFilter::Done => completed,
        }
    }
}

/// Case-insensitive title search followed by the status predicate.
/// Ordering follows the input collection; no sort is applied.
pub fn filter_tasks(tasks: &[Task], query: &str, status: StatusFilter) -> Vec<Task> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&query))
        .filter(|task| status.matches(task.completed))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tasks = vec![
            make_task("1", "Buy milk", false),
            make_task("2", "Walk the dog", false),
            make_task("3", "buy stamps", true),
        ];

        let visible = filter_tasks(&tasks, "BUY", StatusFilter::All);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[1].id, "3");
    }

    #[test]
    fn test_status_applies_after_search() {
        let tasks = vec![
            make_task("1", "Buy milk", false),
            make_task("2", "buy stamps", true),
        ];

        let pending = filter_tasks(&tasks, "buy", StatusFilter::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "1");

        let done = filter_tasks(&tasks, "buy", StatusFilter::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "2");
    }

    #[test]
    fn test_all_filter_matches_both_states() {
        let tasks = vec![
            make_task("1", "a", false),
            make_task("2", "b", true),
        ];
        assert_eq!(filter_tasks(&tasks, "", StatusFilter::All).len(), 2);
    }

    #[test]
    fn test_empty_query_preserves_order() {
        let tasks = vec![
            make_task("2", "Second created", false),
            make_task("1", "First created", false),
        ];

        let visible = filter_tasks(&tasks, "", StatusFilter::All);
        assert_eq!(visible[0].id, "2");
        assert_eq!(visible[1].id, "1");
    }

    #[test]
    fn test_no_match_yields_empty_projection() {
        let tasks = vec![make_task("1", "Buy milk", false)];
        assert!(filter_tasks(&tasks, "xyz", StatusFilter::All).is_empty());
    }
}
