//! # Repo Utils CLI
//!
//! This is the binary entry point for the `repo-utils` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Installing the logger and building the repository context.
//! - Executing the requested command and turning any error into exit
//!   status 1.
//!
//! The core logic lives in the `repo_utils` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
