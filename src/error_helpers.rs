//! Helpers for turning file I/O failures into actionable messages

use std::io;
use std::path::Path;

use crate::error::FileOperation;

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Create an enhanced error message for file permission issues
pub fn permission_error(path: &Path, operation: &str) -> String {
    let parent_dir = path
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    format!(
        "Permission denied when {} '{}'\n\n\
         Possible fixes:\n\
         1. Check file permissions: ls -l '{}'\n\
         2. The temp file is created next to the target: ensure write access with: chmod u+w '{}'\n\
         3. Set `atomic = false` under [write] in the config to write in place",
        operation,
        path.display(),
        path.display(),
        parent_dir
    )
}

/// Create an enhanced error message for file not found issues
pub fn not_found_error(path: &Path, context: &str) -> String {
    format!(
        "File not found: '{}'\n\n\
         Context: {}\n\n\
         Possible fixes:\n\
         1. Check the path passed to -i is correct\n\
         2. Use an absolute path if the relative path is ambiguous",
        path.display(),
        context,
    )
}

/// Message for a failed read or write of the edited file
pub fn file_access_message(path: &Path, operation: &FileOperation, err: &io::Error) -> String {
    if is_permission_denied(err) {
        permission_error(path, operation.as_verb())
    } else if is_not_found(err) {
        not_found_error(path, &format!("{} file", operation.as_verb()))
    } else {
        format!(
            "edit failed on file, {}: error {}: {}",
            path.display(),
            operation.as_verb(),
            err
        )
    }
}
