//! Error types for the CLI

use std::path::PathBuf;

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] promstatic_common::Error),

    #[error(transparent)]
    Compile(#[from] promstatic_compiler::CompileError),

    #[error("{}: {message}", .path.display())]
    Input { path: PathBuf, message: String },

    #[error("validation error: {message}")]
    Validation { message: String },
}

impl Error {
    pub fn input(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Input {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
