//! Edit command representation
//!
//! Each `-e` argument is parsed into one [`EditCommand`]. Strings that match
//! neither grammar become [`EditCommand::Unrecognized`] and are skipped by
//! both engines.

use serde::{Deserialize, Serialize};

/// A parsed edit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Literal replace-all (`s<d>pattern<d>replacement<d>`)
    Substitute { pattern: String, replacement: String },

    /// Insert `text` after every line starting with `prefix` (`/prefix/atext`)
    Append { prefix: String, text: String },

    /// Neither grammar matched
    Unrecognized,
}

impl EditCommand {
    pub fn is_substitute(&self) -> bool {
        matches!(self, EditCommand::Substitute { .. })
    }

    pub fn is_append(&self) -> bool {
        matches!(self, EditCommand::Append { .. })
    }
}

/// What to do with a substitute command whose pattern is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPatternPolicy {
    /// Fail the run with `InvalidEditSyntax`
    #[default]
    Reject,
    /// Skip the command
    Ignore,
}

/// Engine options that are not part of the command text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOptions {
    pub empty_pattern: EmptyPatternPolicy,
}
