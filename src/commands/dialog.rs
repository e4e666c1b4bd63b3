//! Dialog Commands
//!
//! Browser-provided confirmation prompt.

use async_trait::async_trait;

use crate::reconciler::Confirm;

/// `window.confirm` behind the async `Confirm` seam
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
