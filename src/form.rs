//! Task Form
//!
//! Shared create/edit form state and its client-side validation.

use crate::error::FormValidationError;
use crate::models::{Task, TaskPayload};

/// Minimum trimmed length of title and description
pub const MIN_FIELD_LEN: usize = 3;

/// Contents of the create/edit modal. `id` is set when editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub id: Option<u32>,
    pub title: String,
    pub desc: String,
    pub is_complete: bool,
}

impl TaskForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-filled with a task's current fields
    pub fn edit(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title.clone(),
            desc: task.desc.clone(),
            is_complete: task.is_complete,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() { "Edit Task" } else { "New Task" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Save Changes" } else { "Create Task" }
    }

    /// Trim both text fields and check their length
    pub fn validate(&self) -> Result<TaskPayload, FormValidationError> {
        let title = self.title.trim();
        let desc = self.desc.trim();
        if title.chars().count() < MIN_FIELD_LEN {
            return Err(FormValidationError::TitleTooShort);
        }
        if desc.chars().count() < MIN_FIELD_LEN {
            return Err(FormValidationError::DescTooShort);
        }
        Ok(TaskPayload {
            title: title.to_string(),
            desc: desc.to_string(),
            is_complete: self.is_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, desc: &str) -> TaskForm {
        TaskForm {
            title: title.to_string(),
            desc: desc.to_string(),
            ..TaskForm::blank()
        }
    }

    #[test]
    fn test_short_title_rejected() {
        assert_eq!(form("ab", "long enough").validate(), Err(FormValidationError::TitleTooShort));
    }

    #[test]
    fn test_short_desc_rejected() {
        assert_eq!(form("abc", "xy").validate(), Err(FormValidationError::DescTooShort));
    }

    #[test]
    fn test_whitespace_does_not_count() {
        assert_eq!(form("  ab  ", "xyz").validate(), Err(FormValidationError::TitleTooShort));
        assert_eq!(form("abc", " \t xy \n").validate(), Err(FormValidationError::DescTooShort));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut f = form("  abc ", " xyz  ");
        f.is_complete = true;
        let payload = f.validate().unwrap();
        assert_eq!(payload.title, "abc");
        assert_eq!(payload.desc, "xyz");
        assert!(payload.is_complete);
    }

    #[test]
    fn test_edit_prefills_from_task() {
        let task = Task { id: 4, title: "Buy milk".into(), desc: "2% fat".into(), is_complete: true };
        let f = TaskForm::edit(&task);
        assert_eq!(f.id, Some(4));
        assert_eq!(f.heading(), "Edit Task");
        assert_eq!(f.submit_label(), "Save Changes");
        assert!(f.is_complete);
        assert_eq!(TaskForm::blank().heading(), "New Task");
    }
}
