//! Signal Presenter
//!
//! Writes render cycle results into the reactive UI store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::form::TaskForm;
use crate::frame::Frame;
use crate::models::Toast;
use crate::reconciler::{Phase, Presenter};
use crate::store::{store_dismiss_toast, store_push_toast, UiStateStoreFields, UiStore};

pub struct SignalPresenter {
    store: UiStore,
    toast_duration_ms: u32,
}

impl SignalPresenter {
    pub fn new(store: UiStore, toast_duration_ms: u32) -> Self {
        Self { store, toast_duration_ms }
    }
}

impl Presenter for SignalPresenter {
    fn show_loading(&self) {
        *self.store.phase().write() = Phase::Loading;
        self.store.frame().write().items.clear();
    }

    fn show_failed(&self) {
        *self.store.phase().write() = Phase::Failed;
    }

    fn show_frame(&self, frame: &Frame) {
        *self.store.frame().write() = frame.clone();
        *self.store.phase().write() = Phase::Rendered;
    }

    fn notify(&self, toast: Toast) {
        let store = self.store;
        let duration = self.toast_duration_ms;
        let id = store_push_toast(&store, toast);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_toast(&store, id);
        });
    }

    fn open_form(&self, form: TaskForm) {
        *self.store.form().write() = Some(form);
    }

    fn close_form(&self) {
        *self.store.form().write() = None;
    }
}

#[cfg(test)]
mod tests {
    use reactive_stores::Store;

    use super::*;
    use crate::frame::DisplayItem;
    use crate::models::{Counts, Task, ViewMode};
    use crate::store::UiState;

    fn frame_of(titles: &[&str]) -> Frame {
        let tasks: Vec<Task> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Task {
                id: i as u32 + 1,
                title: title.to_string(),
                desc: String::new(),
                is_complete: false,
            })
            .collect();
        Frame {
            counts: Counts::from_tasks(&tasks),
            items: tasks.into_iter().enumerate().map(|(i, t)| DisplayItem::new(t, i)).collect(),
            view_mode: ViewMode::List,
        }
    }

    #[test]
    fn test_cycle_writes_reach_the_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            let presenter = SignalPresenter::new(store, 3000);
            let frame = frame_of(&["Buy milk", "Call mom"]);

            presenter.show_frame(&frame);
            assert_eq!(store.phase().get_untracked(), Phase::Rendered);
            assert_eq!(store.frame().get_untracked(), frame);

            presenter.show_loading();
            assert_eq!(store.phase().get_untracked(), Phase::Loading);
            assert!(store.frame().get_untracked().items.is_empty());
            // counts stay until the next frame
            assert_eq!(store.frame().get_untracked().counts.all, 2);

            presenter.show_failed();
            assert_eq!(store.phase().get_untracked(), Phase::Failed);
            assert!(store.frame().get_untracked().items.is_empty());
        });
    }

    #[test]
    fn test_form_open_and_close() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            let presenter = SignalPresenter::new(store, 3000);

            presenter.open_form(TaskForm::blank());
            assert!(store.form().get_untracked().is_some_and(|form| form.id.is_none()));

            presenter.close_form();
            assert!(store.form().get_untracked().is_none());
        });
    }
}
