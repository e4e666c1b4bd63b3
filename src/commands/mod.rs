//! REST Command Wrappers
//!
//! Frontend bindings to the task API and to browser host capabilities.

mod http;
mod task;
mod dialog;

// Re-export all public items
pub use task::*;
pub use dialog::*;
