//! Filter Engine
//!
//! Narrows the cached collection by search text and filter mode.

use crate::models::{FilterMode, Task};

/// Stable filter: search text (case-insensitive substring of title or desc),
/// then filter mode. Input order is kept.
pub fn filter_tasks<'a>(tasks: &'a [Task], mode: FilterMode, search: &str) -> Vec<&'a Task> {
    let query = search.to_lowercase();
    tasks
        .iter()
        .filter(|task| query.is_empty() || matches_query(task, &query))
        .filter(|task| mode.accepts(task))
        .collect()
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query) || task.desc.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, desc: &str, is_complete: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            desc: desc.to_string(),
            is_complete,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, "Buy milk", "2%", false),
            make_task(2, "Write report", "Quarterly MILK numbers", true),
            make_task(3, "Call mom", "Sunday", false),
            make_task(4, "Fix bike", "Rear tyre", true),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let tasks = sample();
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::All, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_matches_title_or_desc_case_insensitively() {
        let tasks = sample();
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::All, "Milk")), vec![1, 2]);
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::All, "tyre")), vec![4]);
        assert!(filter_tasks(&tasks, FilterMode::All, "bread").is_empty());
    }

    #[test]
    fn test_filter_modes_partition_collection() {
        let tasks = sample();
        let active = filter_tasks(&tasks, FilterMode::Active, "");
        let completed = filter_tasks(&tasks, FilterMode::Completed, "");
        assert_eq!(ids(&active), vec![1, 3]);
        assert_eq!(ids(&completed), vec![2, 4]);
        assert!(active.iter().all(|t| !t.is_complete));
        assert!(completed.iter().all(|t| t.is_complete));
    }

    #[test]
    fn test_search_and_mode_compose() {
        let tasks = sample();
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::Active, "milk")), vec![1]);
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::Completed, "milk")), vec![2]);
    }

    #[test]
    fn test_order_is_preserved() {
        let tasks = vec![
            make_task(9, "zeta task", "", false),
            make_task(3, "alpha task", "", false),
            make_task(5, "mid task", "", false),
        ];
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::All, "task")), vec![9, 3, 5]);
    }

    #[test]
    fn test_whitespace_search_is_literal() {
        let tasks = sample();
        // "Buy milk", "Write report", "Call mom", "Fix bike" all contain a space
        assert_eq!(filter_tasks(&tasks, FilterMode::All, " ").len(), 4);
        assert!(filter_tasks(&tasks, FilterMode::All, "  ").is_empty());
    }
}
