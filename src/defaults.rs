//! Default values for repo-utils configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring the library and the CLI agree on them.

/// Seconds a single backend command may run before it is killed.
///
/// Overridden by the `--timeout` CLI flag or the `REPO_UTILS_TIMEOUT`
/// environment variable. Zero disables the limit.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the default working-copy path.
pub const PATH_ENV: &str = "REPO_UTILS_PATH";

/// Environment variable holding the default command timeout in seconds.
pub const TIMEOUT_ENV: &str = "REPO_UTILS_TIMEOUT";

/// Log level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Message used by `create-tag` when none is given.
pub fn default_tag_message(tag: &str) -> String {
    format!("tag: {}", tag)
}
