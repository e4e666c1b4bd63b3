//! Frontend Models
//!
//! Data structures matching the REST collaborator's entities.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

impl Task {
    /// Payload that rewrites this task with the completion flag inverted
    pub fn toggled_payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            desc: self.desc.clone(),
            is_complete: !self.is_complete,
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub desc: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All Tasks",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Whether a task passes this filter
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.is_complete,
            FilterMode::Completed => task.is_complete,
        }
    }
}

/// Layout of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// CSS class of the list container
    pub fn container_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "todo-list grid-view",
            ViewMode::List => "todo-list list-view",
        }
    }
}

/// User's current filter/search/view choice. Lives for the session only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub filter: FilterMode,
    pub search: String,
    pub view: ViewMode,
}

/// Task counts shown in the filter nav
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_complete).count();
        Self {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    pub fn for_filter(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}

/// Per-card action, carried as the `data-action` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Toggle,
    Edit,
    Delete,
}

impl ItemAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemAction::Toggle => "toggle",
            ItemAction::Edit => "edit",
            ItemAction::Delete => "delete",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "toggle" => Some(ItemAction::Toggle),
            "edit" => Some(ItemAction::Edit),
            "delete" => Some(ItemAction::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

/// Transient user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}
