//! View-Model Cache
//!
//! Snapshot of the server collection as of the last successful fetch,
//! its derived counts, and the session's selection.

use crate::filter::filter_tasks;
use crate::frame::{DisplayItem, Frame};
use crate::models::{Counts, FilterMode, Selection, Task, ViewMode};

#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    tasks: Vec<Task>,
    counts: Counts,
    selection: Selection,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    #[cfg(test)]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replace the whole cache; counts are recomputed, never patched
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.counts = Counts::from_tasks(&tasks);
        self.tasks = tasks;
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.selection.filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.selection.search = search.into();
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.selection.view = view;
    }

    /// Filter the cache with the current selection and lay it out
    pub fn frame(&self) -> Frame {
        let items = filter_tasks(&self.tasks, self.selection.filter, &self.selection.search)
            .into_iter()
            .enumerate()
            .map(|(index, task)| DisplayItem::new(task.clone(), index))
            .collect();
        Frame {
            items,
            counts: self.counts,
            view_mode: self.selection.view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, is_complete: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            desc: String::new(),
            is_complete,
        }
    }

    #[test]
    fn test_replace_recomputes_counts() {
        let mut vm = ViewModel::new();
        vm.replace_tasks(vec![make_task(1, "one", false), make_task(2, "two", true)]);
        assert_eq!(vm.counts(), Counts { all: 2, active: 1, completed: 1 });

        vm.replace_tasks(vec![make_task(3, "three", true)]);
        assert_eq!(vm.counts(), Counts { all: 1, active: 0, completed: 1 });
        assert!(vm.find(1).is_none());
        assert_eq!(vm.find(3).map(|t| t.title.as_str()), Some("three"));
    }

    #[test]
    fn test_frame_follows_selection() {
        let mut vm = ViewModel::new();
        vm.replace_tasks(vec![
            make_task(1, "Buy milk", false),
            make_task(2, "Buy bread", true),
            make_task(3, "Call mom", false),
        ]);
        vm.set_search("buy");
        vm.set_filter(FilterMode::Active);
        vm.set_view_mode(ViewMode::List);

        let frame = vm.frame();
        assert_eq!(frame.ids(), vec![1]);
        assert_eq!(frame.view_mode, ViewMode::List);
        // counts describe the whole cache, not the filtered view
        assert_eq!(frame.counts.all, 3);
        assert_eq!(frame.items[0].reveal_delay_ms, 0);
    }

    #[test]
    fn test_defaults() {
        let vm = ViewModel::new();
        assert_eq!(vm.selection(), &Selection::default());
        assert_eq!(vm.selection().filter, FilterMode::All);
        assert_eq!(vm.selection().view, ViewMode::Grid);
        assert!(vm.frame().is_empty());
    }
}
