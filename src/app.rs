//! Focus & Flow Frontend App
//!
//! Wires the REST store, the presenter and the reconciler together and lays
//! out the sidebar, toolbar, board, modal and toasts.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{BrowserConfirm, HttpTaskStore};
use crate::components::{FilterNav, TaskBoard, TaskFormModal, ToastStack, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::presenter::SignalPresenter;
use crate::reconciler::Reconciler;
use crate::store::UiState;
use crate::theme::{apply_theme, load_theme};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_page();
    tracing::info!("starting against {}", config.api_base);

    // Theme is read once at startup
    let theme = load_theme(&config.theme_storage_key);
    apply_theme(theme);

    let ui = Store::new(UiState { theme, ..Default::default() });
    let reconciler = Reconciler::new(
        HttpTaskStore::new(config.api_base.clone()),
        SignalPresenter::new(ui, config.toast_duration_ms),
        BrowserConfirm,
    );
    let ctx = AppContext::new(reconciler, ui, config.theme_storage_key);

    // Provide context to all children
    provide_context(ctx);
    provide_context(ui);

    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_form();
        }
    });

    // Initial render cycle on mount
    Effect::new(move |_| {
        ctx.render();
    });

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <h1 class="brand">"Focus & Flow"</h1>
                <FilterNav />
            </aside>

            <main class="main-content">
                <Toolbar />
                <TaskBoard />
            </main>

            <TaskFormModal />
            <ToastStack />
        </div>
    }
}
