//! Bazaar backend, driven through the `bzr` command.

use std::path::Path;
use std::sync::Arc;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use super::{ensure_message, ensure_new_tag, first_column, probe, Backend};
use crate::commit::Commit;
use crate::error::Result;
use crate::parser;
use crate::process::{run_checked, ProcessRunner};
use crate::vcs::VcsKind;

const BZR: &str = "bzr";

static STATUS_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(added|unknown|removed|modified|renamed|kind changed):$").unwrap());

pub struct Bazaar {
    runner: Arc<dyn ProcessRunner>,
}

impl Bazaar {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str], path: &Path) -> Result<String> {
        Ok(run_checked(self.runner.as_ref(), BZR, args, path)?.stdout)
    }

    /// A revision spec for `rev`: tags become `tag:<name>`, the rest is kept.
    fn revision_spec(&self, path: &Path, rev: &str) -> String {
        if !rev.is_empty() && self.is_tag(path, rev) {
            format!("tag:{}", rev)
        } else {
            rev.to_string()
        }
    }
}

/// Files listed by `bzr status` under any section but `unknown:`.
pub(crate) fn parse_status(output: &str) -> Vec<String> {
    let mut files = Vec::new();
    let mut tracked = false;
    for line in output.lines() {
        if let Some(caps) = STATUS_HEADER_RE.captures(line.trim_end()) {
            tracked = &caps[1] != "unknown";
            continue;
        }
        let entry = line.trim();
        if tracked && !entry.is_empty() {
            files.push(entry.to_string());
        }
    }
    files
}

/// Revno of `tag` from `bzr tags` lines like `1.0.0   3`.
pub(crate) fn parse_tag_revision(output: &str, tag: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let mut columns = line.split_whitespace();
        if columns.next()? != tag {
            return None;
        }
        columns
            .next()
            .filter(|rev| *rev != "?")
            .map(str::to_string)
    })
}

impl Backend for Bazaar {
    fn kind(&self) -> VcsKind {
        VcsKind::Bazaar
    }

    fn is_managed(&self, path: &Path) -> bool {
        probe(self.runner.as_ref(), VcsKind::Bazaar, &["info"], path)
    }

    fn list_tags(&self, path: &Path) -> Result<Vec<String>> {
        Ok(first_column(&self.run(&["tags"], path)?))
    }

    fn is_clean(&self, path: &Path) -> Result<bool> {
        Ok(parse_status(&self.run(&["status"], path)?).is_empty())
    }

    fn create_tag(&self, path: &Path, tag: &str, message: &str) -> Result<String> {
        ensure_new_tag(&self.list_tags(path)?, tag)?;
        if !message.is_empty() {
            warn!("Unused message: bzr tags carry no message ({:?})", message);
        }
        let output = run_checked(self.runner.as_ref(), BZR, &["tag", tag], path)?;
        Ok(output.combined())
    }

    fn list_commits_between(&self, path: &Path, since: &str, until: &str) -> Result<Vec<Commit>> {
        let until = if until == "HEAD" { "" } else { until };
        let out = if since.is_empty() && until.is_empty() {
            self.run(&["log"], path)?
        } else {
            let since = if since.is_empty() {
                "revno:1".to_string()
            } else {
                self.revision_spec(path, since)
            };
            let until = self.revision_spec(path, until);
            let range = format!("{}..{}", since, until);
            self.run(&["log", "-r", &range], path)?
        };
        Ok(parser::bazaar::parse(&out))
    }

    fn first_revision(&self, _path: &Path) -> Result<String> {
        Ok("1".to_string())
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
        let mut args = vec!["commit", "-q", "--strict", "--local", "-m", message];
        args.extend_from_slice(files);
        self.run(&args, path).map(|_| ())
    }
}
