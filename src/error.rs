//! Error types for edit runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error_helpers;

pub type Result<T> = std::result::Result<T, EditError>;

/// Which side of the file round trip failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl FileOperation {
    pub fn as_verb(self) -> &'static str {
        match self {
            FileOperation::Read => "reading",
            FileOperation::Write => "writing",
        }
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    /// The source file could not be read or the result could not be written
    #[error("{}", error_helpers::file_access_message(.path, .operation, .source))]
    FileAccess {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: io::Error,
    },

    /// A substitute command whose body does not split into pattern and replacement
    #[error("invalid edit body, {command}: {reason}")]
    InvalidEditSyntax { command: String, reason: String },

    /// Non-EOF failure while reading lines during the append phase
    #[error("failed to scan buffer: {source}")]
    Scan {
        #[source]
        source: io::Error,
    },
}

impl EditError {
    pub fn file_access(path: impl Into<PathBuf>, operation: FileOperation, source: io::Error) -> Self {
        EditError::FileAccess {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn invalid_syntax(command: &str, reason: impl Into<String>) -> Self {
        EditError::InvalidEditSyntax {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}
