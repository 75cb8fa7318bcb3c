//! Hand-written parsers for the two edit grammars
//!
//! Substitute: `s` DELIM PATTERN DELIM REPLACEMENT DELIM, where DELIM is any
//! single character and PATTERN/REPLACEMENT must not contain it.
//!
//! Append: `/` PREFIX `/` [whitespace] `a` TEXT, where PREFIX is non-empty and
//! contains no `/`, and TEXT runs to the end of the command (or first newline).

use crate::command::EditCommand;
use crate::error::{EditError, Result};

/// Parse one edit command string into its tagged form
///
/// Only a substitute command with a malformed body is an error; anything that
/// matches neither outer shape is [`EditCommand::Unrecognized`].
pub fn parse_edit(command: &str) -> Result<EditCommand> {
    if let Some(cmd) = parse_substitute(command)? {
        return Ok(cmd);
    }
    if let Some(cmd) = parse_append(command) {
        return Ok(cmd);
    }
    Ok(EditCommand::Unrecognized)
}

/// Parse every command in order, failing on the first malformed substitute
pub fn parse_edits<S: AsRef<str>>(commands: &[S]) -> Result<Vec<EditCommand>> {
    commands.iter().map(|c| parse_edit(c.as_ref())).collect()
}

/// Recognize `s<d>...<d>` and split its body on `<d>`
///
/// Returns `Ok(None)` when the outer shape does not match.
pub fn parse_substitute(command: &str) -> Result<Option<EditCommand>> {
    if command.contains('\n') {
        return Ok(None);
    }

    let mut chars = command.chars();
    if chars.next() != Some('s') {
        return Ok(None);
    }
    let Some(delim) = chars.next() else {
        return Ok(None);
    };
    let Some(body) = chars.as_str().strip_suffix(delim) else {
        return Ok(None);
    };

    let parts: Vec<&str> = body.split(delim).collect();
    if parts.len() != 2 {
        return Err(EditError::invalid_syntax(
            command,
            format!(
                "expected pattern and replacement separated by '{}', found {} segment{}",
                delim,
                parts.len(),
                if parts.len() == 1 { "" } else { "s" }
            ),
        ));
    }

    Ok(Some(EditCommand::Substitute {
        pattern: parts[0].to_string(),
        replacement: parts[1].to_string(),
    }))
}

/// Recognize `/prefix/atext`
pub fn parse_append(command: &str) -> Option<EditCommand> {
    let rest = command.strip_prefix('/')?;
    let (prefix, rest) = rest.split_once('/')?;
    if prefix.is_empty() {
        return None;
    }

    let text = rest.trim_start_matches(is_command_space).strip_prefix('a')?;
    let text = match text.find('\n') {
        Some(end) => &text[..end],
        None => text,
    };

    Some(EditCommand::Append {
        prefix: prefix.to_string(),
        text: text.to_string(),
    })
}

// Whitespace accepted between the closing `/` and `a`
fn is_command_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(pattern: &str, replacement: &str) -> EditCommand {
        EditCommand::Substitute {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    fn app(prefix: &str, text: &str) -> EditCommand {
        EditCommand::Append {
            prefix: prefix.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_parse_simple_substitution() {
        assert_eq!(parse_edit("s/foo/bar/").unwrap(), sub("foo", "bar"));
    }

    #[test]
    fn test_parse_substitution_custom_delimiters() {
        assert_eq!(parse_edit("s#/usr/lib#/opt/lib#").unwrap(), sub("/usr/lib", "/opt/lib"));
        assert_eq!(parse_edit("s|a|b|").unwrap(), sub("a", "b"));
        assert_eq!(parse_edit("s:key=1:key=2:").unwrap(), sub("key=1", "key=2"));
        assert_eq!(parse_edit("sé1é2é").unwrap(), sub("1", "2"));
    }

    #[test]
    fn test_parse_substitution_empty_segments() {
        assert_eq!(parse_edit("s/foo//").unwrap(), sub("foo", ""));
        assert_eq!(parse_edit("s//bar/").unwrap(), sub("", "bar"));
        assert_eq!(parse_edit("s///").unwrap(), sub("", ""));
    }

    #[test]
    fn test_parse_substitution_too_many_segments() {
        let err = parse_edit("s/a/b/c/").unwrap_err();
        assert!(matches!(err, EditError::InvalidEditSyntax { .. }));
        assert!(err.to_string().contains("found 3 segments"));
    }

    #[test]
    fn test_parse_substitution_too_few_segments() {
        let err = parse_edit("s/abc/").unwrap_err();
        assert!(matches!(err, EditError::InvalidEditSyntax { .. }));
        assert!(err.to_string().contains("found 1 segment"));

        assert!(parse_edit("s//").is_err());
    }

    #[test]
    fn test_parse_substitution_mismatched_closing_delimiter_is_skipped() {
        assert_eq!(parse_edit("s/a/b|").unwrap(), EditCommand::Unrecognized);
    }

    #[test]
    fn test_parse_substitution_too_short_is_skipped() {
        assert_eq!(parse_edit("s").unwrap(), EditCommand::Unrecognized);
        assert_eq!(parse_edit("s/").unwrap(), EditCommand::Unrecognized);
        assert_eq!(parse_edit("").unwrap(), EditCommand::Unrecognized);
    }

    #[test]
    fn test_parse_substitution_with_newline_is_skipped() {
        assert_eq!(parse_substitute("s/a\n/b/").unwrap(), None);
    }

    #[test]
    fn test_parse_append() {
        assert_eq!(parse_edit("/foo/aINSERTED").unwrap(), app("foo", "INSERTED"));
    }

    #[test]
    fn test_parse_append_preserves_leading_whitespace() {
        assert_eq!(parse_edit("/foo/a   bar").unwrap(), app("foo", "   bar"));
    }

    #[test]
    fn test_parse_append_whitespace_before_a() {
        assert_eq!(parse_edit("/foo/  a bar").unwrap(), app("foo", " bar"));
    }

    #[test]
    fn test_parse_append_empty_text() {
        assert_eq!(parse_edit("/foo/a").unwrap(), app("foo", ""));
    }

    #[test]
    fn test_parse_append_text_stops_at_newline() {
        assert_eq!(parse_edit("/foo/aone\ntwo").unwrap(), app("foo", "one"));
    }

    #[test]
    fn test_parse_append_rejects_empty_prefix() {
        assert_eq!(parse_edit("//atext").unwrap(), EditCommand::Unrecognized);
    }

    #[test]
    fn test_parse_append_requires_a() {
        assert_eq!(parse_edit("/foo/itext").unwrap(), EditCommand::Unrecognized);
        assert_eq!(parse_edit("/foo").unwrap(), EditCommand::Unrecognized);
    }

    #[test]
    fn test_unrecognized_commands() {
        assert_eq!(parse_edit("10d").unwrap(), EditCommand::Unrecognized);
        assert_eq!(parse_edit("y/abc/xyz/").unwrap(), EditCommand::Unrecognized);
        assert_eq!(parse_edit("hello").unwrap(), EditCommand::Unrecognized);
    }

    #[test]
    fn test_parse_edits_keeps_order_and_fails_fast() {
        let cmds = parse_edits(&["s/a/b/", "junk", "/x/ay"]).unwrap();
        assert_eq!(cmds, vec![sub("a", "b"), EditCommand::Unrecognized, app("x", "y")]);

        assert!(parse_edits(&["s/a/b/", "s/a/b/c/"]).is_err());
    }
}
