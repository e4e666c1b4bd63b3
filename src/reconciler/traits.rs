//! Reconciler Seams
//!
//! Abstract interfaces the reconciler drives. The browser build plugs in
//! fetch, Leptos signals and `window.confirm`; tests plug in fakes.
//! Everything runs on the single WASM thread, hence `?Send`.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::form::TaskForm;
use crate::frame::Frame;
use crate::models::{Task, TaskPayload, Toast};

/// Remote task collection. Stateless per call, no retries.
#[async_trait(?Send)]
pub trait TaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn create(&self, payload: &TaskPayload) -> Result<(), StoreError>;

    async fn update(&self, id: u32, payload: &TaskPayload) -> Result<(), StoreError>;

    async fn delete(&self, id: u32) -> Result<(), StoreError>;
}

/// Display side of a render cycle
pub trait Presenter {
    /// Show the loading placeholder and clear the displayed cards
    fn show_loading(&self);

    /// Hide the loading placeholder, leaving the list cleared
    fn show_failed(&self);

    /// Replace the displayed cards, counts and layout
    fn show_frame(&self, frame: &Frame);

    fn notify(&self, toast: Toast);

    fn open_form(&self, form: TaskForm);

    fn close_form(&self);
}

/// Asks the user to confirm a destructive action
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}
