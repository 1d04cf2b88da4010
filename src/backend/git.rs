//! Git backend, driven through the `git` command.

use std::path::Path;
use std::sync::Arc;

use super::{ensure_message, ensure_new_tag, probe, with_message, Backend};
use crate::commit::Commit;
use crate::error::Result;
use crate::parser;
use crate::process::{run_checked, ProcessRunner};
use crate::vcs::VcsKind;

const GIT: &str = "git";

pub struct Git {
    runner: Arc<dyn ProcessRunner>,
}

impl Git {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str], path: &Path) -> Result<String> {
        Ok(run_checked(self.runner.as_ref(), GIT, args, path)?.stdout)
    }
}

/// Revision range for `git log`: `[<since>..]<until>`, or nothing at all.
pub(crate) fn log_range(since: &str, until: &str) -> Option<String> {
    if since.is_empty() && until.is_empty() {
        return None;
    }
    let mut range = String::new();
    if !since.is_empty() {
        range.push_str(since);
        range.push_str("..");
    }
    range.push_str(until);
    Some(range)
}

/// One tag per non-empty line of `git tag`.
pub(crate) fn parse_tags(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl Backend for Git {
    fn kind(&self) -> VcsKind {
        VcsKind::Git
    }

    fn is_managed(&self, path: &Path) -> bool {
        probe(self.runner.as_ref(), VcsKind::Git, &["rev-parse"], path)
    }

    fn list_tags(&self, path: &Path) -> Result<Vec<String>> {
        Ok(parse_tags(&self.run(&["tag"], path)?))
    }

    fn is_clean(&self, path: &Path) -> Result<bool> {
        let out = self.run(&["status", "--porcelain", "--untracked-files=no"], path)?;
        Ok(out.trim().is_empty())
    }

    fn create_tag(&self, path: &Path, tag: &str, message: &str) -> Result<String> {
        ensure_new_tag(&self.list_tags(path)?, tag)?;
        // Without a message an annotated tag would open an editor, so fall
        // back to a lightweight tag.
        let args = if message.is_empty() {
            vec!["tag", tag]
        } else {
            with_message(vec!["tag", "-a", tag], message)
        };
        let output = run_checked(self.runner.as_ref(), GIT, &args, path)?;
        Ok(output.combined())
    }

    fn list_commits_between(&self, path: &Path, since: &str, until: &str) -> Result<Vec<Commit>> {
        let mut args = vec!["log".to_string()];
        if let Some(range) = log_range(since, until) {
            args.push(range);
        }
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Ok(parser::git::parse(&self.run(&args, path)?))
    }

    fn first_revision(&self, path: &Path) -> Result<String> {
        let out = self.run(&["rev-list", "--max-parents=0", "HEAD"], path)?;
        // Unrelated histories merged together have several roots; the last
        // one listed is the oldest.
        Ok(out
            .trim()
            .lines()
            .last()
            .unwrap_or_default()
            .trim()
            .to_string())
    }

    fn tag_revision(&self, path: &Path, tag: &str) -> Result<Option<String>> {
        if !self.is_tag(path, tag) {
            return Ok(None);
        }
        let out = self.run(&["rev-list", "-n", "1", tag], path)?;
        let rev = out.trim();
        Ok((!rev.is_empty()).then(|| rev.to_string()))
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
