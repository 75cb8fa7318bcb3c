//! minised: minimal in-place stream editor
//!
//! The library exposes the edit pipeline for tests and embedding. The binary
//! is at src/main.rs.

pub mod append;
pub mod cli;
pub mod command;
pub mod config;
pub mod diff_formatter;
pub mod error;
pub mod error_helpers;
pub mod file_processor;
pub mod logger;
pub mod parser;
pub mod substitute;

// Re-export commonly used types for convenience
pub use append::append;
pub use command::{EditCommand, EditOptions, EmptyPatternPolicy};
pub use config::{Config, EditConfig, WriteConfig};
pub use error::{EditError, FileOperation};
pub use file_processor::{apply, FileEdit, FileProcessor};
pub use parser::{parse_edit, parse_edits};
pub use substitute::substitute;
