//! Test doubles shared by the integration tests.

mod mock_confirmation_prompt;

#[allow(unused_imports)]
pub use mock_confirmation_prompt::MockConfirmationPrompt;
