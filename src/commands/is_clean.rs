//! # Is Clean Command Implementation

use anyhow::Result;
use clap::Args;

use repo_utils::output::{json, yes_no};

use super::Context;

/// Tell whether the working copy has uncommitted changes
#[derive(Args, Debug)]
pub struct IsCleanArgs {
    /// Print a JSON boolean instead of yes/no
    #[arg(short, long)]
    pub json: bool,
}

pub fn execute(args: &IsCleanArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.kind()?;
    let clean = ctx.manager.is_clean(kind, &ctx.path)?;
    if args.json {
        println!("{}", json(&clean)?);
    } else {
        println!("{}", yes_no(&ctx.output, clean));
    }
    Ok(())
}
