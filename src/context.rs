//! Application Context
//!
//! Shared handle provided via Leptos Context API. Components call into the
//! reconciler through it; each call runs on the local task queue.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::commands::{BrowserConfirm, HttpTaskStore};
use crate::form::TaskForm;
use crate::models::{FilterMode, ItemAction, ViewMode};
use crate::presenter::SignalPresenter;
use crate::reconciler::Reconciler;
use crate::store::{UiStateStoreFields, UiStore};
use crate::theme::{apply_theme, save_theme};

pub type AppReconciler = Reconciler<HttpTaskStore, SignalPresenter, BrowserConfirm>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reconciler; lives on the WASM thread only
    reconciler: StoredValue<Rc<AppReconciler>, LocalStorage>,
    /// Reactive UI state written by the presenter
    pub ui: UiStore,
    /// Browser storage key of the theme preference
    theme_key: StoredValue<String>,
}

impl AppContext {
    pub fn new(reconciler: AppReconciler, ui: UiStore, theme_key: String) -> Self {
        Self {
            reconciler: StoredValue::new_local(Rc::new(reconciler)),
            ui,
            theme_key: StoredValue::new(theme_key),
        }
    }

    fn spawn<F, Fut>(&self, run: F)
    where
        F: FnOnce(Rc<AppReconciler>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let reconciler = self.reconciler.get_value();
        spawn_local(run(reconciler));
    }

    /// Start a render cycle
    pub fn render(&self) {
        self.spawn(|r| async move {
            let outcome = r.render().await;
            debug!("{:?}: phase {:?}, {} tasks cached", outcome, r.phase(), r.counts().all);
        });
    }

    pub fn set_filter(&self, filter: FilterMode) {
        *self.ui.filter().write() = filter;
        self.spawn(move |r| async move {
            r.set_filter(filter).await;
        });
    }

    pub fn set_search(&self, search: String) {
        self.spawn(move |r| async move {
            r.set_search(search).await;
        });
    }

    pub fn set_view_mode(&self, view: ViewMode) {
        *self.ui.view().write() = view;
        self.spawn(move |r| async move {
            r.set_view_mode(view).await;
        });
    }

    /// Delegated card action
    pub fn dispatch(&self, id: u32, action: ItemAction) {
        self.spawn(move |r| async move {
            r.dispatch(id, action).await;
        });
    }

    pub fn open_create(&self) {
        self.reconciler.get_value().open_create();
    }

    pub fn close_form(&self) {
        self.reconciler.get_value().close_form();
    }

    pub fn submit(&self, form: TaskForm) {
        self.spawn(move |r| async move {
            // already surfaced as a toast
            if let Err(e) = r.submit(form).await {
                debug!("submission rejected: {}", e);
            }
        });
    }

    /// Flip light/dark, persist and apply it
    pub fn toggle_theme(&self) {
        let next = self.ui.theme().get_untracked().toggled();
        *self.ui.theme().write() = next;
        self.theme_key.with_value(|key| save_theme(key, next));
        apply_theme(next);
    }
}
