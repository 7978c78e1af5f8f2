//! aipa-core - System prompt registry for the assistant

pub mod prompts;

pub use prompts::{PromptError, SystemPromptKey};
