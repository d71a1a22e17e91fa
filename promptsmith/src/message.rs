//! Chat message types sent to the generation service.
//!
//! Roles: System (persona, placed first) and User (the composed instruction).

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// System prompt; placed first in the message list.
    System(String),
    /// User input.
    User(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Text content regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Message::System(s) | Message::User(s) => s,
        }
    }
}
