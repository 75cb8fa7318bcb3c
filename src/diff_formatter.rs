use std::io::IsTerminal;

use colored::*;
use similar::{ChangeTag, TextDiff};

use crate::file_processor::FileEdit;

pub struct DiffFormatter;

impl DiffFormatter {
    /// Auto-detect if we should use colors
    pub fn should_use_color() -> bool {
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stdout().is_terminal()
    }

    /// Format a dry-run preview of one edited file
    pub fn format_edit(edit: &FileEdit, use_color: bool) -> String {
        let path = edit.path.display().to_string();

        if !edit.is_changed() {
            return "No changes would be made.\n".to_string();
        }

        let old = String::from_utf8_lossy(&edit.original);
        let new = String::from_utf8_lossy(&edit.edited);
        let diff = TextDiff::from_lines(&*old, &*new);

        let mut output = String::new();
        let (header_old, header_new) = (format!("--- {}", path), format!("+++ {}", path));
        if use_color {
            output.push_str(&format!("{}\n{}\n", header_old.bold(), header_new.bold()));
        } else {
            output.push_str(&format!("{}\n{}\n", header_old, header_new));
        }

        let mut added = 0usize;
        let mut removed = 0usize;

        for group in diff.grouped_ops(2) {
            let (first, last) = match (group.first(), group.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => continue,
            };
            let old_range = first.old_range().start..last.old_range().end;
            let new_range = first.new_range().start..last.new_range().end;
            let hunk = format!(
                "@@ -{},{} +{},{} @@",
                old_range.start + 1,
                old_range.len(),
                new_range.start + 1,
                new_range.len()
            );
            if use_color {
                output.push_str(&format!("{}\n", hunk.cyan()));
            } else {
                output.push_str(&hunk);
                output.push('\n');
            }

            for op in &group {
                for change in diff.iter_changes(op) {
                    let sign = change.tag();
                    let line = change.value().strip_suffix('\n').unwrap_or(change.value());
                    let rendered = match sign {
                        ChangeTag::Equal => format!(" {}", line),
                        ChangeTag::Delete => {
                            removed += 1;
                            format!("-{}", line)
                        }
                        ChangeTag::Insert => {
                            added += 1;
                            format!("+{}", line)
                        }
                    };
                    if use_color {
                        let colored_line = match sign {
                            ChangeTag::Equal => rendered.dimmed(),
                            ChangeTag::Delete => rendered.red(),
                            ChangeTag::Insert => rendered.green(),
                        };
                        output.push_str(&format!("{}\n", colored_line));
                    } else {
                        output.push_str(&rendered);
                        output.push('\n');
                    }
                }
            }
        }

        let summary = format!(
            "\nTotal: {} line{} added, {} removed\n",
            added,
            if added == 1 { "" } else { "s" },
            removed
        );
        output.push_str(&summary);
        output
    }
}
