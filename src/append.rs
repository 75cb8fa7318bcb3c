//! Append engine
//!
//! Scans the buffer line by line and, after every line that starts with an
//! append command's prefix, inserts that command's text as a new line. When
//! several commands fire on one line their text is inserted in list order.

use std::io::{BufRead, Cursor};

use tracing::debug;

use crate::command::EditCommand;
use crate::error::{EditError, Result};
use crate::parser::parse_append;

/// Run all append commands over `buffer`
///
/// The output is always newline-terminated: a `\n` is added first if the
/// buffer is empty or does not already end with one.
pub fn append<S: AsRef<str>>(mut buffer: Vec<u8>, commands: &[S]) -> Result<Vec<u8>> {
    let appends: Vec<(String, String)> = commands
        .iter()
        .filter_map(|raw| match parse_append(raw.as_ref()) {
            Some(EditCommand::Append { prefix, text }) => Some((prefix, text)),
            _ => None,
        })
        .collect();

    if buffer.last() != Some(&b'\n') {
        buffer.push(b'\n');
    }

    let mut reader = Cursor::new(buffer.as_slice());
    let mut out = Vec::with_capacity(buffer.len());
    let mut line = Vec::new();
    let mut inserted = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| EditError::Scan { source })?;
        // A final chunk without a terminator cannot occur after normalization
        if read == 0 || line.last() != Some(&b'\n') {
            break;
        }

        out.extend_from_slice(&line);

        for (prefix, text) in &appends {
            if line.starts_with(prefix.as_bytes()) {
                out.extend_from_slice(text.as_bytes());
                out.push(b'\n');
                inserted += 1;
            }
        }
    }

    debug!(commands = appends.len(), inserted, "applied appends");
    Ok(out)
}
