//! # VCS Backends
//!
//! Each supported VCS is driven by one type implementing [`Backend`]. A
//! backend knows the command vocabulary of its tool, how to read that tool's
//! output, and the conventions it uses for revisions and tags:
//!
//! - [`git::Git`]: lightweight refs, `HEAD`, hashes.
//! - [`mercurial::Mercurial`]: tags in `.hgtags`, `tip`, changeset hashes.
//! - [`bazaar::Bazaar`]: `tag:` revision specs, integer revnos.
//! - [`subversion::Subversion`]: tags are directories under `^/tags`.
//!
//! All commands go through a shared [`ProcessRunner`], so backends hold no
//! state of their own beyond it and can be probed concurrently.

pub mod bazaar;
pub mod git;
pub mod mercurial;
pub mod subversion;

use std::path::Path;

use log::debug;

use crate::commit::Commit;
use crate::error::{Error, Result};
use crate::process::{run_checked, ProcessRunner};
use crate::vcs::VcsKind;

/// The uniform operation set every VCS backend provides.
pub trait Backend: Send + Sync {
    /// Which VCS this backend drives.
    fn kind(&self) -> VcsKind;

    /// Whether `path` is managed by this VCS.
    ///
    /// Runs one cheap read-only command. Any failure, including the tool not
    /// being installed, answers `false`.
    fn is_managed(&self, path: &Path) -> bool;

    /// Tag names, in the order the tool lists them.
    fn list_tags(&self, path: &Path) -> Result<Vec<String>>;

    /// Whether the working copy has no uncommitted changes to tracked files.
    ///
    /// Untracked files never make a working copy dirty.
    fn is_clean(&self, path: &Path) -> Result<bool>;

    /// Create `tag`, returning the raw output of the tool.
    ///
    /// Fails with [`Error::TagAlreadyExists`] when the tag is already listed,
    /// without running the creation command. `message` is only passed on
    /// when non-empty.
    fn create_tag(&self, path: &Path, tag: &str, message: &str) -> Result<String>;

    /// Commits between `since` and `until`.
    ///
    /// An empty `since` means the beginning of history; `until == "HEAD"` is
    /// the latest revision. Either side may be a tag name.
    fn list_commits_between(&self, path: &Path, since: &str, until: &str) -> Result<Vec<Commit>>;

    /// The earliest revision of the repository.
    fn first_revision(&self, path: &Path) -> Result<String>;

    /// Revision a tag points at, `None` if the tag cannot be resolved.
    fn tag_revision(&self, path: &Path, tag: &str) -> Result<Option<String>>;

    /// Schedule `file` for addition; an empty `file` adds everything the
    /// tool adds by default.
    fn add(&self, path: &Path, file: &str) -> Result<()>;

    /// Commit `files` (all changes when empty) with `message`.
    fn commit(&self, path: &Path, message: &str, files: &[&str]) -> Result<()>;

    /// Whether `name` is an existing tag. Listing failures answer `false`.
    fn is_tag(&self, path: &Path, name: &str) -> bool {
        self.list_tags(path)
            .map(|tags| tags.iter().any(|t| t == name))
            .unwrap_or(false)
    }
}

/// Answer the managed-by probe from a single command's exit status.
pub(crate) fn probe(runner: &dyn ProcessRunner, kind: VcsKind, args: &[&str], path: &Path) -> bool {
    match run_checked(runner, kind.program(), args, path) {
        Ok(_) => true,
        Err(e) => {
            debug!("{} probe failed at {}: {}", kind, path.display(), e);
            false
        }
    }
}

/// Fail with [`Error::TagAlreadyExists`] if `tag` is in `tags`.
pub(crate) fn ensure_new_tag(tags: &[String], tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(Error::MissingTag);
    }
    if tags.iter().any(|t| t == tag) {
        return Err(Error::TagAlreadyExists {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

/// Fail with [`Error::MissingMessage`] on an empty commit message.
pub(crate) fn ensure_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::MissingMessage);
    }
    Ok(())
}

/// Build `<base> [-m <message>]` style argument lists.
pub(crate) fn with_message<'a>(mut args: Vec<&'a str>, message: &'a str) -> Vec<&'a str> {
    if !message.is_empty() {
        args.push("-m");
        args.push(message);
    }
    args
}

/// First whitespace-separated column of every non-empty line.
pub(crate) fn first_column(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
