use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    /// Bad user input. The CLI prints the message and keeps reading commands.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AddrBookError {
    pub fn validation(message: impl Into<String>) -> Self {
        AddrBookError::Validation(message.into())
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AddrBookError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
