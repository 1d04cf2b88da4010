//! # Which Command Implementation
//!
//! Prints the VCS managing the working copy. Detection always runs here,
//! even with `--vcs`, so the answer reflects the directory itself.

use anyhow::Result;
use clap::Args;

use repo_utils::output::json;

use super::Context;

/// Print which VCS manages the working copy
#[derive(Args, Debug)]
pub struct WhichArgs {
    /// Print a JSON string
    #[arg(short, long)]
    pub json: bool,
}

pub fn execute(args: &WhichArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.manager.which_vcs(&ctx.path)?;
    if args.json {
        println!("{}", json(kind.as_str())?);
    } else {
        println!("{}", kind);
    }
    Ok(())
}
