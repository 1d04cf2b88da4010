//! # Error Suggestions
//!
//! Helpers for CLI-level errors that carry hints. Library errors already
//! include their own `hint:` lines; these cover problems detected before any
//! backend runs.

use std::path::Path;

use crate::defaults;

/// Generate an error for a working-copy path that is not a directory.
pub fn path_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Path not found or not a directory: {path}\n\n\
         hint: Use -p/--path to point at a working copy\n\
         hint: Set the {env} environment variable",
        path = path.display(),
        env = defaults::PATH_ENV
    )
}

/// Generate an error for a failed tag creation, keeping the tool output.
pub fn create_tag_failed(tag: &str, output: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Could not create tag '{tag}'\n{output}\n\n\
         hint: Run with --log-level debug to see the commands that were run",
        output = output.trim()
    )
}
