//! Reconciler
//!
//! Owns the view-model cache and runs render cycles:
//! fetch → replace cache → filter → frame → presenter.
//! Card interaction enters through [`Reconciler::dispatch`], keyed by task id
//! and action tag, so nothing is rebound per cycle.

mod traits;

pub use traits::{Confirm, Presenter, TaskStore};

use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use crate::error::SubmitError;
use crate::form::TaskForm;
use crate::models::{Counts, FilterMode, ItemAction, Task, Toast, ViewMode};
#[cfg(test)]
use crate::models::Selection;
use crate::view_model::ViewModel;

pub const DELETE_PROMPT: &str = "Delete this task?";
const GENERIC_FAILURE: &str = "Something went wrong";

/// Render cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// How a render cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Frame shown with this many cards
    Rendered(usize),
    Failed,
    /// A newer cycle was requested before this one's fetch returned
    Superseded,
}

pub struct Reconciler<S, P, C> {
    store: S,
    presenter: P,
    confirm: C,
    view_model: RefCell<ViewModel>,
    phase: Cell<Phase>,
    /// Number of the most recently requested cycle
    latest_cycle: Cell<u64>,
}

impl<S, P, C> Reconciler<S, P, C>
where
    S: TaskStore,
    P: Presenter,
    C: Confirm,
{
    pub fn new(store: S, presenter: P, confirm: C) -> Self {
        Self {
            store,
            presenter,
            confirm,
            view_model: RefCell::new(ViewModel::new()),
            phase: Cell::new(Phase::Idle),
            latest_cycle: Cell::new(0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    #[cfg(test)]
    pub fn selection(&self) -> Selection {
        self.view_model.borrow().selection().clone()
    }

    pub fn counts(&self) -> Counts {
        self.view_model.borrow().counts()
    }

    pub fn task(&self, id: u32) -> Option<Task> {
        self.view_model.borrow().find(id).cloned()
    }

    /// Run one render cycle. Only the most recently requested cycle may
    /// apply its fetch result.
    pub async fn render(&self) -> RenderOutcome {
        let cycle = self.latest_cycle.get() + 1;
        self.latest_cycle.set(cycle);
        debug!("render cycle {} started", cycle);

        self.phase.set(Phase::Loading);
        self.presenter.show_loading();

        let fetched = self.store.list().await;

        if cycle != self.latest_cycle.get() {
            debug!("render cycle {} superseded by {}", cycle, self.latest_cycle.get());
            return RenderOutcome::Superseded;
        }

        let tasks = match fetched {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("render cycle {} failed: {}", cycle, e);
                self.phase.set(Phase::Failed);
                self.presenter.show_failed();
                self.presenter.notify(Toast::error("Could not load tasks"));
                return RenderOutcome::Failed;
            }
        };

        let frame = {
            let mut vm = self.view_model.borrow_mut();
            vm.replace_tasks(tasks);
            vm.frame()
        };

        self.phase.set(Phase::Rendered);
        self.presenter.show_frame(&frame);
        debug!("render cycle {} showed {} of {} tasks", cycle, frame.items.len(), frame.counts.all);
        RenderOutcome::Rendered(frame.items.len())
    }

    pub async fn set_filter(&self, filter: FilterMode) -> RenderOutcome {
        self.view_model.borrow_mut().set_filter(filter);
        self.render().await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> RenderOutcome {
        self.view_model.borrow_mut().set_search(search);
        self.render().await
    }

    pub async fn set_view_mode(&self, view: ViewMode) -> RenderOutcome {
        self.view_model.borrow_mut().set_view_mode(view);
        self.render().await
    }

    /// Single entry point for card actions
    pub async fn dispatch(&self, id: u32, action: ItemAction) {
        match action {
            ItemAction::Toggle => self.toggle_complete(id).await,
            ItemAction::Edit => self.edit(id),
            ItemAction::Delete => self.delete(id).await,
        }
    }

    pub async fn toggle_complete(&self, id: u32) {
        // The cache may be stale relative to a rapid double click
        let Some(task) = self.task(id) else {
            debug!("toggle ignored, task {} not in cache", id);
            return;
        };

        match self.store.update(id, &task.toggled_payload()).await {
            Ok(()) => {
                let message = if task.is_complete { "Task uncompleted" } else { "Task completed" };
                self.presenter.notify(Toast::success(message));
                self.render().await;
            }
            Err(e) => {
                warn!("toggle of task {} failed: {}", id, e);
                self.presenter.notify(Toast::error("Update failed"));
            }
        }
    }

    pub fn edit(&self, id: u32) {
        if let Some(task) = self.task(id) {
            self.presenter.open_form(TaskForm::edit(&task));
        }
    }

    pub async fn delete(&self, id: u32) {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            return;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!("deleted task {}", id);
                self.presenter.notify(Toast::warning("Task deleted"));
                self.render().await;
            }
            Err(e) => {
                warn!("delete of task {} failed: {}", id, e);
                self.presenter.notify(Toast::error("Delete failed"));
            }
        }
    }

    pub fn open_create(&self) {
        self.presenter.open_form(TaskForm::blank());
    }

    pub fn close_form(&self) {
        self.presenter.close_form();
    }

    /// Validate and send the create/edit form. On failure the form stays open.
    pub async fn submit(&self, form: TaskForm) -> Result<(), SubmitError> {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.presenter.notify(Toast::error(e.to_string()));
                return Err(e.into());
            }
        };

        let (result, done) = match form.id {
            Some(id) => (self.store.update(id, &payload).await, "Task updated"),
            None => (self.store.create(&payload).await, "Task created"),
        };

        if let Err(e) = result {
            warn!("form submission failed: {}", e);
            let message = e.to_string();
            let message = if message.is_empty() { GENERIC_FAILURE.to_string() } else { message };
            self.presenter.notify(Toast::error(message));
            return Err(e.into());
        }

        self.presenter.close_form();
        self.presenter.notify(Toast::success(done));
        self.render().await;
        Ok(())
    }
}
