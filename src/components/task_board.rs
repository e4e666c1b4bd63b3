//! Task Board Component
//!
//! Loading skeleton, empty state and the card list. Card buttons are handled
//! by one click listener on the list container, resolved through the
//! `data-id` / `data-action` attributes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TaskCard;
use crate::context::AppContext;
use crate::models::ItemAction;
use crate::reconciler::Phase;
use crate::store::UiStateStoreFields;

#[component]
pub fn TaskBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    let is_loading = move || ui.phase().get() == Phase::Loading;
    let is_rendered = move || ui.phase().get() == Phase::Rendered;
    let is_empty = move || ui.frame().with(|frame| frame.is_empty());

    let on_list_click = move |ev: web_sys::MouseEvent| {
        if let Some((id, action)) = action_target(&ev) {
            ctx.dispatch(id, action);
        }
    };

    view! {
        <section class="task-board">
            <Show when=is_loading>
                <div id="loading-skeleton" class="loading-skeleton">
                    <div class="skeleton-card"></div>
                    <div class="skeleton-card"></div>
                    <div class="skeleton-card"></div>
                </div>
            </Show>

            <Show when=move || is_rendered() && is_empty()>
                <div id="empty-state" class="empty-state">
                    <h3>"No tasks here"</h3>
                    <p>"Create a task or change the filter."</p>
                </div>
            </Show>

            <div
                id="todo-list"
                class=move || ui.frame().with(|frame| frame.view_mode.container_class())
                hidden=is_empty
                on:click=on_list_click
            >
                <For
                    each=move || ui.frame().get().items
                    key=|item| (item.task.clone(), item.reveal_delay_ms)
                    children=|item| view! { <TaskCard item=item /> }
                />
            </div>
        </section>
    }
}

/// Task id and action of the card button under a click
fn action_target(ev: &web_sys::MouseEvent) -> Option<(u32, ItemAction)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok()??;
    let action = ItemAction::parse(&button.get_attribute("data-action")?)?;
    let card = button.closest("[data-id]").ok()??;
    let id = card.get_attribute("data-id")?.parse().ok()?;
    Some((id, action))
}
