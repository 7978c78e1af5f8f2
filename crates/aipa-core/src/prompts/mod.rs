//! System prompts for the assistant
//!
//! This module holds the static system prompt text sent to the LLM at the
//! start of a conversation, keyed by context. The registry is compile-time
//! data; nothing here parses or interprets the prompt content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// The DEFAULT system prompt used for ordinary conversations.
pub const DEFAULT: &str = include_str!("default.md");

/// Key selecting a system prompt. The set of keys is closed; adding a
/// context means adding a variant here and its text below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemPromptKey {
    Default,
}

impl SystemPromptKey {
    /// All known keys, in declaration order.
    pub const ALL: &'static [SystemPromptKey] = &[SystemPromptKey::Default];

    /// Canonical string form of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemPromptKey::Default => "default",
        }
    }

    /// The prompt text for this key, exactly as stored
    pub fn prompt(&self) -> &'static str {
        match self {
            SystemPromptKey::Default => DEFAULT,
        }
    }
}

impl fmt::Display for SystemPromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemPromptKey {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SystemPromptKey::Default),
            other => Err(PromptError::KeyNotFound(other.to_string())),
        }
    }
}

/// Get the system prompt for a key
pub fn get(key: SystemPromptKey) -> &'static str {
    key.prompt()
}

/// Iterate over all registered prompt keys
pub fn keys() -> impl Iterator<Item = SystemPromptKey> {
    SystemPromptKey::ALL.iter().copied()
}

/// Look up a prompt by an untrusted string key (e.g. from a config file).
/// Callers holding a [`SystemPromptKey`] should use [`get`] instead.
pub fn lookup(name: &str) -> Result<&'static str, PromptError> {
    match name.parse::<SystemPromptKey>() {
        Ok(key) => Ok(key.prompt()),
        Err(err) => {
            warn!("Unknown system prompt key requested: {}", name);
            Err(err)
        }
    }
}

/// Prompt registry errors
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("unknown system prompt key: {0}")]
    KeyNotFound(String),
}
