//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `repo-utils` command-line tool, one file per subcommand.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and a [`Context`]
//!   and performs the command's logic by calling into the `repo_utils`
//!   library.
//!
//! Commands print their result on stdout only. Diagnostics go through `log`
//! to stderr, and errors bubble up to `main`, which exits with status 1.

pub mod completions;
pub mod create_tag;
pub mod first_rev;
pub mod is_clean;
pub mod list_commits;
pub mod list_tags;
pub mod which;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use repo_utils::output::OutputConfig;
use repo_utils::process::SystemRunner;
use repo_utils::repository::RepositoryManager;
use repo_utils::suggestions;
use repo_utils::vcs::VcsKind;

/// Everything a repository command needs, built from the global options.
pub struct Context {
    pub manager: RepositoryManager,
    pub path: PathBuf,
    pub vcs: Option<VcsKind>,
    pub output: OutputConfig,
}

impl Context {
    pub fn new(
        path: &Path,
        vcs: Option<&str>,
        timeout: Option<Duration>,
        color: &str,
    ) -> Result<Self> {
        if !path.is_dir() {
            return Err(suggestions::path_not_found(path));
        }
        let vcs = vcs.map(str::parse::<VcsKind>).transpose()?;
        let runner = Arc::new(SystemRunner::new(timeout));
        Ok(Self {
            manager: RepositoryManager::with_runner(runner),
            path: path.to_path_buf(),
            vcs,
            output: OutputConfig::from_env_and_flag(color),
        })
    }

    /// The VCS to use: the one forced with `--vcs`, or the detected one.
    pub fn kind(&self) -> Result<VcsKind> {
        match self.vcs {
            Some(kind) => Ok(kind),
            None => Ok(self.manager.which_vcs(&self.path)?),
        }
    }
}
