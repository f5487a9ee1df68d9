//! In-memory task store and its derived views
//!
//! This is a pure domain model with no I/O operations.
//! Persistence is handled by storage adapters in consuming crates.

use crate::task::{Task, TaskId};

/// Sentinel category that selects every task.
pub const ALL_CATEGORY: &str = "ALL";

/// Owns the ordered task list and the selected-category filter.
///
/// Insertion order is display order and is never reordered. The known
/// category set is always derived from the tasks, never stored.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    selected_category: String,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store with the `"ALL"` filter selected.
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            selected_category: ALL_CATEGORY.to_string(),
        }
    }

    /// Seed a store from previously persisted tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks,
            selected_category: ALL_CATEGORY.to_string(),
        }
    }

    /// Append a new incomplete task and return its id.
    ///
    /// The text is trimmed first; whitespace-only text is rejected and
    /// nothing changes.
    pub fn add_task(&mut self, text: &str, category: impl Into<String>) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text, category);
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// List order is unchanged. Silent no-op (returns `false`) when no
    /// task matches.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id. Silent no-op when absent.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.tasks.len() != before
    }

    /// Update the ephemeral category filter. Never persisted.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// `"ALL"` followed by every distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for task in &self.tasks {
            if !categories.contains(&task.category) {
                categories.push(task.category.clone());
            }
        }
        categories
    }

    /// Tasks visible under the current filter, in original order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        if self.selected_category == ALL_CATEGORY {
            self.tasks.iter().collect()
        } else {
            self.tasks
                .iter()
                .filter(|t| t.category == self.selected_category)
                .collect()
        }
    }

    /// The full task list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Count total tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Count completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Count tasks in a category; the `"ALL"` sentinel counts everything.
    pub fn count_in_category(&self, category: &str) -> usize {
        if category == ALL_CATEGORY {
            self.tasks.len()
        } else {
            self.tasks.iter().filter(|t| t.category == category).count()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut store = TaskStore::new();

        let id = store.add_task("Buy milk", "Work").unwrap();

        assert_eq!(store.len(), 1);
        let task = store.get(&id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, "Work");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = TaskStore::new();

        let id = store.add_task("  Buy milk  ", "Work").unwrap();

        assert_eq!(store.get(&id).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_add_rejects_whitespace_only_text() {
        let mut store = TaskStore::new();

        assert!(store.add_task("", "Work").is_none());
        assert!(store.add_task("   \t  ", "Work").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_flips_and_is_own_inverse() {
        let mut store = TaskStore::new();
        let id = store.add_task("Task 1", "Work").unwrap();
        let other = store.add_task("Task 2", "Work").unwrap();

        assert!(store.toggle_task(&id));
        assert!(store.get(&id).unwrap().completed);
        assert!(!store.get(&other).unwrap().completed);

        assert!(store.toggle_task(&id));
        assert!(!store.get(&id).unwrap().completed);
        assert!(!store.get(&other).unwrap().completed);
    }

    #[test]
    fn test_toggle_absent_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task("Task 1", "Work");

        assert!(!store.toggle_task(&TaskId::from("missing")));
        assert_eq!(store.len(), 1);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_removes_exactly_that_task() {
        let mut store = TaskStore::new();
        let id1 = store.add_task("Task 1", "Work").unwrap();
        let id2 = store.add_task("Task 2", "Work").unwrap();

        assert!(store.delete_task(&id1));

        assert_eq!(store.len(), 1);
        assert!(store.get(&id1).is_none());
        assert!(store.get(&id2).is_some());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task("Task 1", "Work");

        assert!(!store.delete_task(&TaskId::from("missing")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_categories_distinct_first_seen_order() {
        let mut store = TaskStore::new();
        store.add_task("a", "Work");
        store.add_task("b", "Personal");
        store.add_task("c", "Work");
        store.add_task("d", "Study");

        assert_eq!(store.categories(), vec!["ALL", "Work", "Personal", "Study"]);
    }

    #[test]
    fn test_categories_never_duplicate_the_sentinel() {
        let mut store = TaskStore::new();
        store.add_task("a", ALL_CATEGORY);

        assert_eq!(store.categories(), vec![ALL_CATEGORY]);
    }

    #[test]
    fn test_filter_all_returns_full_list() {
        let mut store = TaskStore::new();
        store.add_task("a", "Work");
        store.add_task("b", "Personal");

        assert_eq!(store.selected_category(), ALL_CATEGORY);
        let visible = store.filtered_tasks();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text, "a");
        assert_eq!(visible[1].text, "b");
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let mut store = TaskStore::new();
        store.add_task("a", "Work");
        store.add_task("b", "Personal");
        store.add_task("c", "Work");

        store.set_selected_category("Work");

        let visible = store.filtered_tasks();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text, "a");
        assert_eq!(visible[1].text, "c");
    }

    #[test]
    fn test_count_in_category() {
        let mut store = TaskStore::new();
        store.add_task("a", "Work");
        store.add_task("b", "Personal");
        store.add_task("c", "Work");

        assert_eq!(store.count_in_category(ALL_CATEGORY), 3);
        assert_eq!(store.count_in_category("Work"), 2);
        assert_eq!(store.count_in_category("Errands"), 0);
    }

    #[test]
    fn test_scenario_two_categories() {
        let mut store = TaskStore::new();
        store.add_task("Buy milk", "Work");
        store.add_task("Read book", "Personal");

        assert_eq!(store.categories(), vec!["ALL", "Work", "Personal"]);

        store.set_selected_category("Work");
        let visible = store.filtered_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "Buy milk");
    }

    #[test]
    fn test_scenario_toggle_first_delete_second() {
        let mut store = TaskStore::new();
        let first = store.add_task("Task 1", "Work").unwrap();
        let second = store.add_task("Task 2", "Work").unwrap();

        store.toggle_task(&first);
        store.delete_task(&second);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, first);
        assert!(store.tasks()[0].completed);
    }
}
