//! Filter Nav Component
//!
//! All / Active / Completed switch with the live counts.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::FilterMode;
use crate::store::UiStateStoreFields;

#[component]
pub fn FilterNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    view! {
        <nav class="sidebar-nav">
            {FilterMode::ALL.iter().map(|&mode| {
                let is_active = move || ui.filter().get() == mode;
                let count = move || ui.frame().with(|frame| frame.counts.for_filter(mode));
                view! {
                    <button
                        class=move || if is_active() { "nav-item active" } else { "nav-item" }
                        data-filter=mode.as_str()
                        on:click=move |_| ctx.set_filter(mode)
                    >
                        <span class="nav-label">{mode.label()}</span>
                        <span class="nav-count" id=format!("count-{}", mode.as_str())>{count}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
