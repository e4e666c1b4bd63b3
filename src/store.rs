//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Written by the
//! presenter after each render cycle, read by the components.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::TaskForm;
use crate::frame::Frame;
use crate::models::{FilterMode, Toast, ViewMode};
use crate::reconciler::Phase;
use crate::theme::Theme;

/// Toast on screen, keyed for removal
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Phase of the latest render cycle
    pub phase: Phase,
    /// Cards, counts and layout of the latest render cycle
    pub frame: Frame,
    /// Selected filter, highlighted before the refetch returns
    pub filter: FilterMode,
    /// Selected layout, highlighted before the refetch returns
    pub view: ViewMode,
    pub toasts: Vec<ToastEntry>,
    pub next_toast_id: u32,
    /// Open create/edit form (None = modal closed)
    pub form: Option<TaskForm>,
    pub theme: Theme,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast and return its id
pub fn store_push_toast(store: &UiStore, toast: Toast) -> u32 {
    let counter = store.next_toast_id();
    counter.update(|next| *next += 1);
    let id = counter.get_untracked();
    store.toasts().write().push(ToastEntry { id, toast });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|entry| entry.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToastKind;

    #[test]
    fn test_toast_ids_increase() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            let first = store_push_toast(&store, Toast::success("Task created"));
            let second = store_push_toast(&store, Toast::error("Delete failed"));
            assert!(second > first);
            assert_eq!(store.next_toast_id().get_untracked(), second);

            let toasts = store.toasts().get_untracked();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[1].toast.kind, ToastKind::Error);
        });
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            let first = store_push_toast(&store, Toast::success("Task completed"));
            let second = store_push_toast(&store, Toast::warning("Task deleted"));

            store_dismiss_toast(&store, first);
            let ids: Vec<u32> = store.toasts().get_untracked().iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![second]);

            // unknown ids are ignored
            store_dismiss_toast(&store, first);
            assert_eq!(store.toasts().get_untracked().len(), 1);
        });
    }
}
