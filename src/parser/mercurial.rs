//! Parser for `hg log -v` output.
//!
//! ```text
//! changeset:   3:6f1e2d3c4b5a
//! tag:         tip
//! user:        Jane Doe <jane@example.com>
//! date:        Mon May 16 11:56:03 2016 +0200
//! files:       README.md
//! description:
//! fix bug
//! add test
//! ```
//!
//! Once `description:` has been seen every following line belongs to the
//! message until the next changeset, even if it looks like a header.

use std::sync::LazyLock;

use regex::Regex;

use super::{set_author, LogBuilder};
use crate::commit::Commit;

static CHANGESET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^changeset:\s+[0-9]+:(\S+)$").unwrap());
static USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^user:\s+([^<]+)\s+<([^>]+)>$").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^date:\s*(.+)$").unwrap());
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"description:$").unwrap());

/// Parse `hg log -v` output into commits, in log order.
pub fn parse(log: &str) -> Vec<Commit> {
    let mut builder = LogBuilder::new();

    for line in log.lines() {
        let line = line.trim();

        if let Some(caps) = CHANGESET_RE.captures(line) {
            builder.start_record();
            builder.current_or_start().revision = caps[1].to_string();
            continue;
        }

        if builder.in_message() {
            builder.push_message(line);
            continue;
        }

        let Some(commit) = builder.current() else {
            continue;
        };

        if let Some(caps) = USER_RE.captures(line) {
            set_author(commit, &caps[1], &caps[2]);
        } else if let Some(caps) = DATE_RE.captures(line) {
            commit.date = Some(caps[1].to_string());
        } else if DESCRIPTION_RE.is_match(line) {
            builder.enter_message();
        }
    }

    builder.finish()
}
