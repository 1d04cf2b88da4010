//! Mercurial backend, driven through the `hg` command.

use std::path::Path;
use std::sync::Arc;

use super::{ensure_message, ensure_new_tag, first_column, probe, with_message, Backend};
use crate::commit::Commit;
use crate::error::Result;
use crate::parser;
use crate::process::{run_checked, ProcessRunner};
use crate::vcs::VcsKind;

const HG: &str = "hg";

/// Pseudo-tag `hg tags` always lists for the latest changeset.
pub const TIP: &str = "tip";

pub struct Mercurial {
    runner: Arc<dyn ProcessRunner>,
}

impl Mercurial {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str], path: &Path) -> Result<String> {
        Ok(run_checked(self.runner.as_ref(), HG, args, path)?.stdout)
    }
}

/// Tag names from `hg tags`, without `tip`.
pub(crate) fn parse_tags(output: &str) -> Vec<String> {
    first_column(output)
        .into_iter()
        .filter(|name| name != TIP)
        .collect()
}

/// Changeset hash of `tag` from `hg tags` lines like `1.0.0   3:6f1e2d3c4b5a`.
pub(crate) fn parse_tag_revision(output: &str, tag: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let mut columns = line.split_whitespace();
        if columns.next()? != tag {
            return None;
        }
        let rev = columns.last()?;
        let hash = rev.split_once([':', ';']).map_or(rev, |(_, hash)| hash);
        Some(hash.to_string())
    })
}

/// `(since, until)` rewritten for an hg revset range.
pub(crate) fn log_bounds(since: &str, until: &str) -> (String, String) {
    let until = if until == "HEAD" { TIP } else { until };
    let since = if since.is_empty() { "0" } else { since };
    (since.to_string(), until.to_string())
}

impl Backend for Mercurial {
    fn kind(&self) -> VcsKind {
        VcsKind::Mercurial
    }

    fn is_managed(&self, path: &Path) -> bool {
        probe(self.runner.as_ref(), VcsKind::Mercurial, &["status"], path)
    }

    fn list_tags(&self, path: &Path) -> Result<Vec<String>> {
        Ok(parse_tags(&self.run(&["tags"], path)?))
    }

    fn is_clean(&self, path: &Path) -> Result<bool> {
        let out = self.run(&["status", "-q"], path)?;
        Ok(out.trim().is_empty())
    }

    fn create_tag(&self, path: &Path, tag: &str, message: &str) -> Result<String> {
        ensure_new_tag(&self.list_tags(path)?, tag)?;
        let args = with_message(vec!["tag", tag], message);
        let output = run_checked(self.runner.as_ref(), HG, &args, path)?;
        Ok(output.combined())
    }

    fn list_commits_between(&self, path: &Path, since: &str, until: &str) -> Result<Vec<Commit>> {
        let (since, until) = log_bounds(since, until);
        let range = format!("{}..{}", since, until);
        let out = self.run(&["log", "-v", "-r", &range], path)?;
        Ok(parser::mercurial::parse(&out))
    }

    fn first_revision(&self, path: &Path) -> Result<String> {
        let out = self.run(&["log", "-r", "0", "--template", "{node}"], path)?;
        Ok(out.trim().to_string())
    }

    fn tag_revision(&self, path: &Path, tag: &str) -> Result<Option<String>> {
        Ok(parse_tag_revision(&self.run(&["tags"], path)?, tag))
    }

    fn add(&self, path: &Path, file: &str) -> Result<()> {
        let mut args = vec!["add"];
        if !file.is_empty() {
            args.push(file);
        }
        self.run(&args, path).map(|_| ())
    }

    fn commit(&self, path: &Path, message: &str, files: &[&str]) -> Result<()> {
        ensure_message(message)?;
        let mut args = vec!["commit", "-m", message];
        args.extend_from_slice(files);
        self.run(&args, path).map(|_| ())
    }
}
