//! # Error Handling
//!
//! This module defines the centralized error type for `repo-utils`. It uses
//! the `thiserror` library to build a single `Error` enum covering every
//! failure a backend, the resolver or the dispatch layer can report.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. Each variant carries the
//!   context needed to diagnose the problem (tool name, path, tag, captured
//!   command output).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The variants fall into three groups:
//!
//! - Process failures: `ToolNotFound`, `CommandFailed`, `Timeout`, `Io`.
//! - Resolution failures: `NotAVcs`, `AmbiguousVcs`, `UnknownVcs`.
//! - Operation failures: `TagAlreadyExists`, `MissingMessage`, `MissingTag`.
//!
//! No variant is ever retried by the library; the caller decides.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::vcs::VcsKind;

/// Main error type for repo-utils operations
#[derive(Error, Debug)]
pub enum Error {
    /// The executable of a backend could not be found on the search path.
    #[error("{tool} executable not found\n  hint: install {tool} or make sure it is on PATH")]
    ToolNotFound { tool: String },

    /// A backend command ran but did not succeed.
    ///
    /// The captured output is kept for diagnostics.
    #[error("{tool} {} failed{}: {}", args.join(" "), exit_code.map(|c| format!(" (exit code {})", c)).unwrap_or_default(), output.trim())]
    CommandFailed {
        tool: String,
        args: Vec<String>,
        exit_code: Option<i32>,
        output: String,
    },

    /// A backend command did not finish within the configured timeout.
    #[error("{tool} {} timed out after {limit:?}", args.join(" "))]
    Timeout {
        tool: String,
        args: Vec<String>,
        limit: Duration,
    },

    /// No backend manages the given path.
    #[error("No vcs project found at '{}'\n  hint: run inside a git, hg, bzr or svn working copy, or pass --path", path.display())]
    NotAVcs { path: PathBuf },

    /// More than one backend claims the given path.
    #[error("Multiple vcs projects found at '{}': {}\n  hint: pass --vcs to pick one", path.display(), kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", "))]
    AmbiguousVcs { path: PathBuf, kinds: Vec<VcsKind> },

    /// A VCS name outside the supported set.
    #[error("Unknown VCS '{name}' (expected one of: git, hg, bzr, svn)")]
    UnknownVcs { name: String },

    /// The tag to create is already present.
    #[error("Tag '{tag}' already exists")]
    TagAlreadyExists { tag: String },

    /// A commit was requested with an empty message.
    #[error("Message is required")]
    MissingMessage,

    /// A tag was requested with an empty name.
    #[error("Missing tag value")]
    MissingTag,

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
