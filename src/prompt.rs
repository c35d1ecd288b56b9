//! Confirmation prompt collaborator.
//!
//! Destructive actions ask a [`ConfirmationPrompt`] before going ahead. The
//! prompt may wait on the user for as long as it likes; the screen does not
//! time out.

use async_trait::async_trait;

/// Outcome of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Cancelled
        }
    }
}

/// Asks the user to confirm or cancel an action.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Show `title` and `message` and wait for the user's answer.
    async fn confirm(&self, title: &str, message: &str) -> Confirmation;
}

/// A prompt whose answer was decided before it was asked.
///
/// Used where the caller states its decision together with the request,
/// as the MCP `delete_contact` tool does.
#[derive(Debug, Clone, Copy)]
pub struct PresetPrompt(pub Confirmation);

#[async_trait]
impl ConfirmationPrompt for PresetPrompt {
    async fn confirm(&self, title: &str, message: &str) -> Confirmation {
        tracing::debug!(title, message, answer = ?self.0, "Confirmation prompt answered");
        self.0
    }
}
