//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use repo_utils::defaults;

use crate::commands::{self, Context};

/// Repo Utils - Query and tag git, hg, bzr and svn working copies alike
#[derive(Parser, Debug)]
#[command(name = "repo-utils")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Working copy to operate on
    #[arg(
        short,
        long,
        global = true,
        value_name = "DIR",
        env = defaults::PATH_ENV,
        default_value = "."
    )]
    path: PathBuf,

    /// Skip detection and use this VCS (git, hg, bzr, svn)
    #[arg(long, global = true, value_name = "VCS")]
    vcs: Option<String>,

    /// Seconds a VCS command may run before it is killed (0 disables)
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        env = defaults::TIMEOUT_ENV,
        default_value_t = defaults::DEFAULT_TIMEOUT_SECS
    )]
    timeout: u64,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = defaults::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tags of the working copy
    ListTags(commands::list_tags::ListTagsArgs),

    /// List the commits between two revisions as JSON
    ListCommits(commands::list_commits::ListCommitsArgs),

    /// Tell whether the working copy has uncommitted changes
    IsClean(commands::is_clean::IsCleanArgs),

    /// Create a tag
    CreateTag(commands::create_tag::CreateTagArgs),

    /// Print the first revision of the repository
    FirstRev(commands::first_rev::FirstRevArgs),

    /// Print which VCS manages the working copy
    Which(commands::which::WhichArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        let build = || Context::new(&self.path, self.vcs.as_deref(), timeout, &self.color);

        match self.command {
            Commands::ListTags(ref args) => commands::list_tags::execute(args, &build()?),
            Commands::ListCommits(ref args) => commands::list_commits::execute(args, &build()?),
            Commands::IsClean(ref args) => commands::is_clean::execute(args, &build()?),
            Commands::CreateTag(ref args) => commands::create_tag::execute(args, &build()?),
            Commands::FirstRev(ref args) => commands::first_rev::execute(args, &build()?),
            Commands::Which(ref args) => commands::which::execute(args, &build()?),
            Commands::Completions(ref args) => commands::completions::execute(args),
        }
    }
}

/// Install `env_logger` on stderr. `RUST_LOG`, when set, wins over `level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
