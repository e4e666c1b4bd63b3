//! Error Types
//!
//! Remote store failures and local form validation failures.

use thiserror::Error;

/// Failure reported by the remote task store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `list()` failed; the render cycle shows nothing
    #[error("Failed to fetch tasks: {0}")]
    Fetch(String),
    /// create/update rejected; the message is surfaced verbatim
    #[error("{0}")]
    Validation(String),
    #[error("Delete failed: {0}")]
    Delete(String),
}

/// Client-side field check; never reaches the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    #[error("Description must be at least 3 characters")]
    DescTooShort,
}

/// Outcome of a rejected form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
