//! Error types for the conformance engine.

use std::path::PathBuf;

/// Result type alias for conformance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the conformance engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Stylesheet parsing error.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A node kind the walker does not model (strict dispatch only).
    #[error("unrecognized node kind '{kind}'")]
    UnrecognizedNode { kind: String },

    /// A task failed its installation preconditions.
    #[error("task '{task}' failed to install: {message}")]
    TaskInstall { task: String, message: String },

    /// File I/O error while loading an imported stylesheet.
    #[error("failed to read import '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Downstream sink write error.
    #[error("failed to write downstream output: {0}")]
    Stream(std::io::Error),
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an unrecognized-node error.
    pub fn unrecognized_node(kind: impl Into<String>) -> Self {
        Self::UnrecognizedNode { kind: kind.into() }
    }

    /// Create a task installation error.
    pub fn task_install(task: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TaskInstall {
            task: task.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
