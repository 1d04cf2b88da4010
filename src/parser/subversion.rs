//! Parser for `svn log` output.
//!
//! ```text
//! ------------------------------------------------------------------------
//! r42 | jane | 2016-05-16 11:56:03 +0200 (Mon, 16 May 2016) | 2 lines
//!
//! fix bug
//! add test
//! ------------------------------------------------------------------------
//! ```
//!
//! The header line carries revision, author and date together. Subversion
//! has no author email.

use std::sync::LazyLock;

use regex::Regex;

use super::LogBuilder;
use crate::commit::Commit;

static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+$").unwrap());
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^r([0-9]+)\s+\|\s+([^|]+)\|\s+([^(]+)").unwrap());

/// Parse `svn log` output into commits, in log order.
pub fn parse(log: &str) -> Vec<Commit> {
    let mut builder = LogBuilder::new();

    for line in log.lines() {
        let line = line.trim();

        if SPLIT_RE.is_match(line) {
            builder.start_record();
            continue;
        }

        let awaiting_header = builder
            .current()
            .is_none_or(|commit| commit.revision.is_empty());

        if awaiting_header {
            if let Some(caps) = HEADER_RE.captures(line) {
                let commit = builder.current_or_start();
                commit.revision = caps[1].to_string();
                commit.author = Some(caps[2].trim().to_string());
                commit.date = Some(caps[3].trim().to_string());
                continue;
            }
        }

        builder.push_message(line);
    }

    builder.finish()
}
