//! Parser for the default `git log` format.
//!
//! ```text
//! commit 3f2a...
//! Author: Jane Doe <jane@example.com>
//! Date:   Mon May 16 11:56:03 2016 +0200
//!
//!     fix bug
//!     add test
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{set_author, LogBuilder};
use crate::commit::Commit;

static COMMIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^commit\s+(\S+)").unwrap());
static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Author:\s+([^<]+)\s+<([^>]+)>$").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Date:\s*(.+)$").unwrap());
static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+(.+)$").unwrap());

/// Parse `git log` output into commits, in log order.
pub fn parse(log: &str) -> Vec<Commit> {
    let mut builder = LogBuilder::new();

    for line in log.lines() {
        if let Some(caps) = COMMIT_RE.captures(line) {
            builder.start_record();
            builder.current_or_start().revision = caps[1].to_string();
            continue;
        }

        let Some(commit) = builder.current() else {
            continue;
        };

        if let Some(caps) = AUTHOR_RE.captures(line) {
            set_author(commit, &caps[1], &caps[2]);
        } else if let Some(caps) = DATE_RE.captures(line) {
            commit.date = Some(caps[1].trim().to_string());
        } else if let Some(caps) = MESSAGE_RE.captures(line) {
            builder.push_message(&caps[1]);
        }
    }

    builder.finish()
}
