//! Display Frame
//!
//! What one render cycle hands to the presenter: the filtered cards,
//! the counts and the layout.

use crate::models::{Counts, Task, ViewMode};

/// Delay between consecutive card reveal animations
pub const REVEAL_STAGGER_MS: u32 = 50;

/// One card in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub task: Task,
    pub reveal_delay_ms: u32,
}

impl DisplayItem {
    pub fn new(task: Task, index: usize) -> Self {
        Self {
            task,
            reveal_delay_ms: u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(REVEAL_STAGGER_MS),
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.task.is_complete { "todo-card completed" } else { "todo-card" }
    }

    pub fn card_style(&self) -> String {
        format!("animation-delay: {}ms", self.reveal_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub items: Vec<DisplayItem>,
    pub counts: Counts,
    pub view_mode: ViewMode,
}

impl Frame {
    /// Empty frames show the empty-state placeholder instead of the list
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.task.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_delay_is_staggered_by_index() {
        let task = Task { id: 1, title: "abc".into(), desc: "xyz".into(), is_complete: true };
        let item = DisplayItem::new(task, 3);
        assert_eq!(item.reveal_delay_ms, 150);
        assert_eq!(item.card_style(), "animation-delay: 150ms");
        assert_eq!(item.card_class(), "todo-card completed");
    }

    #[test]
    fn test_reveal_delay_saturates_on_huge_index() {
        let task = Task { id: 1, title: "abc".into(), desc: String::new(), is_complete: false };
        assert_eq!(DisplayItem::new(task.clone(), 100_000_000).reveal_delay_ms, u32::MAX);
        assert_eq!(DisplayItem::new(task, usize::MAX).reveal_delay_ms, u32::MAX);
    }
}
