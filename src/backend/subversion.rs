//! Subversion backend, driven through the `svn` command.
//!
//! Subversion has no native tags. By convention a tag is a copy of `trunk`
//! under `<root>/tags/<name>`, so listing tags lists that directory and
//! resolving one means finding the revision it was copied from.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::{ensure_message, ensure_new_tag, probe, with_message, Backend};
use crate::commit::Commit;
use crate::error::{Error, Result};
use crate::parser;
use crate::process::{run_checked, ProcessRunner};
use crate::vcs::VcsKind;

const SVN: &str = "svn";

const ROOT_KEY: &str = "Repository Root";

static COPY_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+A\s+/tags/[^\s]+\s+\(from /[^:]+:([0-9]+)\)").unwrap()
});

pub struct Subversion {
    runner: Arc<dyn ProcessRunner>,
}

impl Subversion {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str], path: &Path) -> Result<String> {
        Ok(run_checked(self.runner.as_ref(), SVN, args, path)?.stdout)
    }

    /// `svn info .` as a key/value map.
    pub fn repository_info(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        Ok(parse_info(&self.run(&["info", "."], path)?))
    }

    /// The repository root URL reported by `svn info`.
    pub fn repository_root(&self, path: &Path) -> Result<String> {
        self.repository_info(path)?
            .remove(ROOT_KEY)
            .filter(|root| !root.is_empty())
            .ok_or_else(|| Error::CommandFailed {
                tool: SVN.to_string(),
                args: vec!["info".to_string(), ".".to_string()],
                exit_code: None,
                output: format!("no '{}' reported", ROOT_KEY),
            })
    }

    /// `rev` itself, or the revision it was copied from when it names a tag.
    fn resolve(&self, path: &Path, rev: &str) -> Result<String> {
        if rev.is_empty() || !self.is_tag(path, rev) {
            return Ok(rev.to_string());
        }
        Ok(self
            .tag_revision(path, rev)?
            .unwrap_or_else(|| rev.to_string()))
    }
}

/// `Key: value` lines, both sides trimmed. Lines without a colon are skipped.
pub(crate) fn parse_info(output: &str) -> BTreeMap<String, String> {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Entries of `svn ls ^/tags`, without the trailing `/`.
pub(crate) fn parse_tags(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim().trim_end_matches('/'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Source revision of the copy that created a tag, from
/// `svn log -v --stop-on-copy` output.
pub(crate) fn parse_copy_revision(output: &str) -> Option<String> {
    COPY_FROM_RE
        .captures(output)
        .map(|caps| caps[1].to_string())
}

impl Backend for Subversion {
    fn kind(&self) -> VcsKind {
        VcsKind::Subversion
    }

    fn is_managed(&self, path: &Path) -> bool {
        probe(self.runner.as_ref(), VcsKind::Subversion, &["list"], path)
    }

    fn list_tags(&self, path: &Path) -> Result<Vec<String>> {
        Ok(parse_tags(&self.run(&["ls", "^/tags"], path)?))
    }

    fn is_clean(&self, path: &Path) -> Result<bool> {
        let out = self.run(&["status", "-q"], path)?;
        Ok(out.trim().is_empty())
    }

    fn create_tag(&self, path: &Path, tag: &str, message: &str) -> Result<String> {
        // A repository without a tags folder has no tags yet.
        let tags = match self.list_tags(path) {
            Ok(tags) => tags,
            Err(Error::CommandFailed { output, .. }) => {
                debug!("no tags listed: {}", output.trim());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        ensure_new_tag(&tags, tag)?;
        let root = self.repository_root(path)?;

        let tags_dir = format!("{}/tags/", root);
        match run_checked(
            self.runner.as_ref(),
            SVN,
            &["mkdir", &tags_dir, "-m", "Create tag folder"],
            path,
        ) {
            Ok(_) => {}
            Err(e @ Error::CommandFailed { .. }) => {
                warn!("Could not create {}: {}", tags_dir, e);
            }
            Err(e) => return Err(e),
        }

        let trunk = format!("{}/trunk", root);
        let target = format!("{}/tags/{}", root, tag);
        let args = with_message(vec!["copy", &trunk, &target], message);
        let output = run_checked(self.runner.as_ref(), SVN, &args, path)?;
        Ok(output.combined())
    }

    fn list_commits_between(&self, path: &Path, since: &str, until: &str) -> Result<Vec<Commit>> {
        let since = self.resolve(path, since)?;
        let until = self.resolve(path, until)?;
        let since = if since.is_empty() { "0".to_string() } else { since };
        let until = if until.is_empty() { "HEAD".to_string() } else { until };
        debug!("svn log range {}:{}", since, until);
        let range = format!("{}:{}", since, until);
        let out = self.run(&["log", "-r", &range, "^/."], path)?;
        Ok(parser::subversion::parse(&out))
    }

    fn first_revision(&self, _path: &Path) -> Result<String> {
        Ok("1".to_string())
    }

    fn tag_revision(&self, path: &Path, tag: &str) -> Result<Option<String>> {
        let root = self.repository_root(path)?;
        let url = format!("{}/tags/{}", root, tag);
        let out = self.run(&["log", &url, "-v", "--stop-on-copy"], path)?;
        Ok(parse_copy_revision(&out))
    }

    fn add(&self, path: &Path, file: &str) -> Result<()> {
        let args = if file.is_empty() {
            vec!["add", "--force", "."]
        } else {
            vec!["add", file]
        };
        self.run(&args, path).map(|_| ())
    }

    fn commit(&self, path: &Path, message: &str, files: &[&str]) -> Result<()> {
        ensure_message(message)?;
        let mut args = vec!["commit", "-m", message];
        args.extend_from_slice(files);
        self.run(&args, path).map(|_| ())
    }
}
