//! # Commits
//!
//! The normalized commit record every log parser produces, plus the ordering
//! helpers applied to commit lists after they have been listed.
//!
//! Dates are stored exactly as the backend printed them. They are only turned
//! into timestamps on demand, by trying the known backend layouts in order;
//! a date matching none of them is treated as unknown rather than an error.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Known date layouts, tried in order.
///
/// - `Mon 2016-05-16 11:56:03 +0200` (bzr)
/// - `Mon May 16 11:56:03 2016 +0200` (git, hg)
/// - `2016-05-16 11:56:03 +0200` (svn)
const DATE_LAYOUTS: [&str; 3] = [
    "%a %Y-%m-%d %H:%M:%S %z",
    "%a %b %d %H:%M:%S %Y %z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// One change record, normalized across backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Backend-native identifier: a hash for git/hg, a number for bzr/svn.
    pub revision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Commit {
    /// Parse the stored date with the first matching known layout.
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        let date = self.date.as_deref()?.trim();
        if date.is_empty() {
            return None;
        }
        DATE_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(date, layout).ok())
    }

    /// Append one line to the message, separating lines with `\n`.
    pub(crate) fn push_message_line(&mut self, line: &str) {
        match self.message.as_mut() {
            Some(message) => {
                message.push('\n');
                message.push_str(line);
            }
            None => self.message = Some(line.to_string()),
        }
    }
}

/// Direction for [`order_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort commits by date in place.
///
/// A commit whose date cannot be parsed is never considered later than any
/// other, so it lands before every dated commit in both directions. The sort
/// is stable: commits with equal or unknown dates keep their relative order.
pub fn order_by_date(commits: &mut [Commit], order: DateOrder) {
    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, Commit)> = commits
        .iter_mut()
        .map(|c| (c.parsed_date(), std::mem::take(c)))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match order {
            DateOrder::Ascending => a.cmp(b),
            DateOrder::Descending => b.cmp(a),
        },
    });

    for (slot, (_, commit)) in commits.iter_mut().zip(keyed) {
        *slot = commit;
    }
}

/// Reverse the commit list in place.
pub fn reverse(commits: &mut [Commit]) {
    commits.reverse();
}
