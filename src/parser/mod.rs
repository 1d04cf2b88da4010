//! # Log Parsers
//!
//! One parser per backend turns the raw text of that backend's log command
//! into [`Commit`] records. All four share the same shape:
//!
//! 1.  Scan the text line by line, keeping an optional record under
//!     construction.
//! 2.  A record delimiter emits the pending record (if it has acquired a
//!     revision) and starts a fresh one.
//! 3.  Header lines fill the revision, author, email and date.
//! 4.  Message lines are appended to the message, skipping blank ones.
//! 5.  At the end of input the pending record is emitted if it has a
//!     revision.
//!
//! Parsing never fails. Unrecognized lines outside a message are ignored, and
//! a record that never sees a revision line is dropped.
//!
//! The grammars differ per backend:
//!
//! - **git**: `commit <hash>` starts a record; message lines are indented.
//! - **hg**: `changeset: <n>:<hash>` starts a record; `description:` opens
//!   the message.
//! - **bzr**: a line of dashes starts a record; `message:` opens the message.
//! - **svn**: a line of dashes starts a record; one header line carries the
//!   revision, author and date; every other line is message.

pub mod bazaar;
pub mod git;
pub mod mercurial;
pub mod subversion;

use crate::commit::Commit;

/// Accumulates commits while a log is scanned.
#[derive(Debug, Default)]
pub(crate) struct LogBuilder {
    commits: Vec<Commit>,
    current: Option<Commit>,
    in_message: bool,
}

impl LogBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit the pending record, if any, and open a new empty one.
    pub(crate) fn start_record(&mut self) {
        self.flush();
        self.current = Some(Commit::default());
    }

    /// The record under construction, if one has been started.
    pub(crate) fn current(&mut self) -> Option<&mut Commit> {
        self.current.as_mut()
    }

    /// The record under construction, starting one if none is open.
    pub(crate) fn current_or_start(&mut self) -> &mut Commit {
        self.current.get_or_insert_with(Commit::default)
    }

    pub(crate) fn in_message(&self) -> bool {
        self.in_message
    }

    pub(crate) fn enter_message(&mut self) {
        if self.current.is_some() {
            self.in_message = true;
        }
    }

    /// Append a message line to the open record; blank lines are dropped.
    pub(crate) fn push_message(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if let Some(commit) = self.current.as_mut() {
            commit.push_message_line(line);
        }
    }

    /// Emit the pending record and return everything collected.
    pub(crate) fn finish(mut self) -> Vec<Commit> {
        self.flush();
        self.commits
    }

    fn flush(&mut self) {
        self.in_message = false;
        if let Some(commit) = self.current.take() {
            if !commit.revision.is_empty() {
                self.commits.push(commit);
            }
        }
    }
}

/// Store an author captured from a `Name <email>` line.
pub(crate) fn set_author(commit: &mut Commit, name: &str, email: &str) {
    commit.author = Some(name.trim().to_string());
    commit.email = Some(email.trim().to_string());
}
