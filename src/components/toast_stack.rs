//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <div id="toast-container" class="toast-container" aria-live="polite">
            <For
                each=move || ui.toasts().get()
                key=|entry| entry.id
                children=|entry| {
                    view! {
                        <div class=format!("toast {}", entry.toast.kind.as_str())>{entry.toast.message}</div>
                    }
                }
            />
        </div>
    }
}
