use async_trait::async_trait;
use contact_list::prompt::{Confirmation, ConfirmationPrompt};
use std::sync::{Arc, Mutex};

/// Mock confirmation prompt for testing.
///
/// Answers every prompt with a preset outcome and records each title and
/// message it was shown, for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockConfirmationPrompt {
    answer: Confirmation,
    shown: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl MockConfirmationPrompt {
    /// A prompt the user always confirms.
    pub fn confirming() -> Self {
        Self::answering(Confirmation::Confirmed)
    }

    /// A prompt the user always cancels.
    pub fn cancelling() -> Self {
        Self::answering(Confirmation::Cancelled)
    }

    pub fn answering(answer: Confirmation) -> Self {
        Self {
            answer,
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times the prompt was shown.
    pub fn call_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }

    /// Title and message of the most recent prompt.
    pub fn last_shown(&self) -> Option<(String, String)> {
        self.shown.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConfirmationPrompt for MockConfirmationPrompt {
    async fn confirm(&self, title: &str, message: &str) -> Confirmation {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}
