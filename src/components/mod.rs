//! UI Components
//!
//! Leptos components for the task board.

mod filter_nav;
mod toolbar;
mod task_board;
mod task_card;
mod task_form_modal;
mod toast_stack;

pub use filter_nav::FilterNav;
pub use toolbar::Toolbar;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_form_modal::TaskFormModal;
pub use toast_stack::ToastStack;
