//! Task Form Modal Component
//!
//! Shared create/edit form. Closes on ×, Cancel, backdrop click and Escape
//! (the Escape listener lives in `App`).

use leptos::prelude::*;

use crate::context::AppContext;
use crate::form::TaskForm;
use crate::store::UiStateStoreFields;

/// Renders the dialog while a form is open
#[component]
pub fn TaskFormModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    move || ui.form().get().map(|form| view! { <TaskFormDialog form=form /> })
}

#[component]
fn TaskFormDialog(form: TaskForm) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = form.id;
    let heading = form.heading();
    let submit_label = form.submit_label();
    let (title, set_title) = signal(form.title);
    let (desc, set_desc) = signal(form.desc);
    let (is_complete, set_is_complete) = signal(form.is_complete);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(TaskForm {
            id,
            title: title.get_untracked(),
            desc: desc.get_untracked(),
            is_complete: is_complete.get_untracked(),
        });
    };

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            ctx.close_form();
        }
    };

    view! {
        <div id="modal-backdrop" class="modal-backdrop visible" aria-hidden="false" on:click=on_backdrop>
            <div class="modal" role="dialog" aria-modal="true">
                <header class="modal-header">
                    <h2 id="modal-title">{heading}</h2>
                    <button id="modal-close" type="button" aria-label="Close" on:click=move |_| ctx.close_form()>
                        "×"
                    </button>
                </header>

                <form id="todo-form" on:submit=on_submit>
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        autofocus=true
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <label for="desc">"Description"</label>
                    <textarea
                        id="desc"
                        prop:value=desc
                        on:input=move |ev| set_desc.set(event_target_value(&ev))
                    ></textarea>

                    <label class="checkbox-row">
                        <input
                            id="isComplete"
                            type="checkbox"
                            prop:checked=is_complete
                            on:change=move |ev| set_is_complete.set(event_target_checked(&ev))
                        />
                        "Mark as completed"
                    </label>

                    <div class="modal-actions">
                        <button id="cancel-btn" type="button" on:click=move |_| ctx.close_form()>"Cancel"</button>
                        <button id="submit-btn" type="submit" class="btn-primary">
                            <span class="btn-text">{submit_label}</span>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
