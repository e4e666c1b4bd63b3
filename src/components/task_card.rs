//! Task Card Component
//!
//! One task. Buttons carry `data-action`; the board handles the clicks.

use leptos::prelude::*;

use crate::frame::DisplayItem;
use crate::models::ItemAction;

#[component]
pub fn TaskCard(item: DisplayItem) -> impl IntoView {
    let class = item.card_class();
    let style = item.card_style();
    let task = item.task;
    let completed = task.is_complete;

    view! {
        <article class=class data-id=task.id.to_string() style=style>
            <div class="todo-header">
                <button
                    class="todo-check"
                    type="button"
                    aria-label="Toggle complete"
                    data-action=ItemAction::Toggle.as_str()
                >
                    {completed.then_some("✓")}
                </button>
                <div class="todo-body">
                    <h3 class="todo-title">{task.title}</h3>
                    <p class="todo-desc">{task.desc}</p>
                </div>
            </div>
            <div class="todo-footer">
                {if completed {
                    view! { <span class="todo-badge">"Completed"</span> }.into_any()
                } else {
                    view! { <span></span> }.into_any()
                }}
                <div class="todo-actions">
                    <button type="button" data-action=ItemAction::Edit.as_str()>"Edit"</button>
                    <button type="button" class="btn-delete" data-action=ItemAction::Delete.as_str()>"Delete"</button>
                </div>
            </div>
        </article>
    }
}
