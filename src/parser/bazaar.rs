//! Parser for `bzr log` output.
//!
//! ```text
//! ------------------------------------------------------------
//! revno: 2
//! committer: Jane Doe <jane@example.com>
//! branch nick: trunk
//! timestamp: Mon 2016-05-16 11:56:03 +0200
//! message:
//!   fix bug
//!   add test
//! ```
//!
//! Merged revisions are printed indented with dotted revnos; they are
//! reported as commits of their own.

use std::sync::LazyLock;

use regex::Regex;

use super::{set_author, LogBuilder};
use crate::commit::Commit;

static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+$").unwrap());
static REVNO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^revno:\s+([0-9]+(?:\.[0-9]+)*)").unwrap());
static COMMITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^committer:\s+([^<]+)\s+<([^>]+)>$").unwrap());
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^timestamp:\s*(.+)$").unwrap());
static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"message:$").unwrap());

/// Parse `bzr log` output into commits, in log order.
pub fn parse(log: &str) -> Vec<Commit> {
    let mut builder = LogBuilder::new();

    for line in log.lines() {
        let line = line.trim();

        if SPLIT_RE.is_match(line) {
            builder.start_record();
            continue;
        }

        if builder.in_message() {
            builder.push_message(line);
            continue;
        }

        if let Some(caps) = REVNO_RE.captures(line) {
            builder.current_or_start().revision = caps[1].to_string();
            continue;
        }

        let Some(commit) = builder.current() else {
            continue;
        };

        if let Some(caps) = COMMITTER_RE.captures(line) {
            set_author(commit, &caps[1], &caps[2]);
        } else if let Some(caps) = TIMESTAMP_RE.captures(line) {
            commit.date = Some(caps[1].to_string());
        } else if MESSAGE_RE.is_match(line) {
            builder.enter_message();
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_REVISIONS: &str = "\
------------------------------------------------------------
revno: 42
tags: 1.0.0
committer: Jane Doe <jane@example.com>
branch nick: trunk
timestamp: Mon 2016-05-16 11:56:03 +0200
message:
  fix bug
  add test
------------------------------------------------------------
revno: 41
committer: John Smith <john@example.com>
branch nick: trunk
timestamp: Sun 2016-05-15 09:00:00 +0200
message:
  initial import
";

    #[test]
    fn test_parse_two_revisions() {
        let commits = parse(TWO_REVISIONS);
        assert_eq!(commits.len(), 2);
        assert_eq!(
            commits[0],
            Commit {
                revision: "42".to_string(),
                author: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                date: Some("Mon 2016-05-16 11:56:03 +0200".to_string()),
                message: Some("fix bug\nadd test".to_string()),
            }
        );
        assert_eq!(commits[1].revision, "41");
        assert_eq!(commits[1].message.as_deref(), Some("initial import"));
        assert!(commits[0].parsed_date().is_some());
    }

    #[test]
    fn test_merged_revisions_are_reported() {
        let log = "\
------------------------------------------------------------
revno: 3 [merge]
committer: Jane Doe <jane@example.com>
timestamp: Mon 2016-05-16 11:56:03 +0200
message:
  merge feature
    ------------------------------------------------------------
    revno: 2.1.1
    committer: John Smith <john@example.com>
    timestamp: Sun 2016-05-15 09:00:00 +0200
    message:
      feature work
";
        let commits = parse(log);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].revision, "3");
        assert_eq!(commits[0].message.as_deref(), Some("merge feature"));
        assert_eq!(commits[1].revision, "2.1.1");
        assert_eq!(commits[1].author.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_delimiter_without_revno_emits_nothing() {
        let log = "\
------------------------------------------------------------
committer: Jane Doe <jane@example.com>
message:
  no revision here
------------------------------------------------------------
";
        assert!(parse(log).is_empty());
    }

    #[test]
    fn test_revno_without_leading_delimiter_starts_record() {
        let commits = parse("revno: 1\ncommitter: A B <a@b>\n");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].email.as_deref(), Some("a@b"));
    }

    #[test]
    fn test_unknown_metadata_lines_are_ignored() {
        let commits = parse("-----\nrevno: 5\nbranch nick: x\nauthor: ignored\n");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author, None);
    }
}
