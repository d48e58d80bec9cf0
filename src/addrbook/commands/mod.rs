//! # Command Layer
//!
//! One module per command. Every handler takes the positional arguments of a
//! command line and the [`AddressBook`](crate::model::AddressBook) and returns a
//! [`CmdResult`]. Handlers never print; bad input comes back as
//! [`AddrBookError::Validation`](crate::error::AddrBookError::Validation).

pub mod add;
pub mod birthday;
pub mod change;
pub mod helpers;
pub mod list;
pub mod phone;
pub mod upcoming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    /// All message contents joined by newlines, without styling.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
