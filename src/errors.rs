use std::result::Result as StdResult;

use thiserror::Error;

use crate::editor::ValidationError;

/// Unified error type for the record model, editor session, and CLI layers.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Editor session already closed")]
    SessionClosed,
    #[error("Unknown input type `{value}`{}", suggestion_hint(.suggestion))]
    UnknownInputType {
        value: String,
        suggestion: Option<&'static str>,
    },
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = StdResult<T, EditorError>;

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean `{}`?)", candidate),
        None => String::new(),
    }
}

impl EditorError {
    /// True when the terminal read was interrupted (Ctrl-C at a prompt).
    pub fn is_interrupted(&self) -> bool {
        match self {
            EditorError::Io(err) => err.kind() == std::io::ErrorKind::Interrupted,
            EditorError::Dialoguer(dialoguer::Error::IO(err)) => {
                err.kind() == std::io::ErrorKind::Interrupted
            }
            _ => false,
        }
    }
}
