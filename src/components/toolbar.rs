//! Toolbar Component
//!
//! Search box, grid/list toggle, theme toggle and the "New Task" button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ViewMode;
use crate::store::UiStateStoreFields;
use crate::theme::Theme;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    view! {
        <header class="toolbar">
            <input
                id="search-input"
                type="search"
                placeholder="Search tasks..."
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />

            <div class="view-toggle">
                {[ViewMode::Grid, ViewMode::List].into_iter().map(|mode| {
                    let is_active = move || ui.view().get() == mode;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "view-btn active" } else { "view-btn" }
                            data-view=mode.as_str()
                            on:click=move |_| ctx.set_view_mode(mode)
                        >
                            {match mode {
                                ViewMode::Grid => "Grid",
                                ViewMode::List => "List",
                            }}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button
                id="theme-toggle"
                type="button"
                aria-label="Toggle theme"
                on:click=move |_| ctx.toggle_theme()
            >
                {move || if ui.theme().get() == Theme::Light { "☾" } else { "☀" }}
            </button>

            <button id="add-todo-btn" type="button" class="btn-primary" on:click=move |_| ctx.open_create()>
                "New Task"
            </button>
        </header>
    }
}
