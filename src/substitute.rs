//! Substitution engine
//!
//! Applies every substitute command in list order to the whole buffer. Each
//! command sees the output of the one before it. Matching is literal,
//! case-sensitive, leftmost-first and non-overlapping.

use tracing::debug;

use crate::command::{EditCommand, EditOptions, EmptyPatternPolicy};
use crate::error::{EditError, Result};
use crate::parser::parse_substitute;

/// Run all substitute commands over `buffer`
///
/// Commands that are not substitute commands are skipped. A substitute
/// command with a malformed body aborts the whole call.
pub fn substitute<S: AsRef<str>>(mut buffer: Vec<u8>, commands: &[S], options: EditOptions) -> Result<Vec<u8>> {
    for raw in commands {
        let raw: &str = raw.as_ref();
        let Some(EditCommand::Substitute { pattern, replacement }) = parse_substitute(raw)? else {
            continue;
        };

        if pattern.is_empty() {
            match options.empty_pattern {
                EmptyPatternPolicy::Reject => {
                    return Err(EditError::invalid_syntax(raw, "pattern must not be empty"));
                }
                EmptyPatternPolicy::Ignore => {
                    debug!(command = raw, "skipping substitute with empty pattern");
                    continue;
                }
            }
        }

        let (replaced, count) = replace_all(&buffer, pattern.as_bytes(), replacement.as_bytes());
        debug!(command = raw, replacements = count, "applied substitute");
        buffer = replaced;
    }

    Ok(buffer)
}

/// Replace every non-overlapping occurrence of `pattern`, scanning left to right
///
/// `pattern` must be non-empty. Returns the new buffer and the number of
/// replacements made.
pub fn replace_all(haystack: &[u8], pattern: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    debug_assert!(!pattern.is_empty());

    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    let mut count = 0;

    while let Some(pos) = find(rest, pattern) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + pattern.len()..];
        count += 1;
    }
    out.extend_from_slice(rest);

    (out, count)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
