//! # First Revision Command Implementation

use anyhow::Result;
use clap::Args;

use repo_utils::output::json;

use super::Context;

/// Print the first revision of the repository
#[derive(Args, Debug)]
pub struct FirstRevArgs {
    /// Print a JSON string
    #[arg(short, long)]
    pub json: bool,
}

pub fn execute(args: &FirstRevArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.kind()?;
    let rev = ctx.manager.first_revision(kind, &ctx.path)?;
    if args.json {
        println!("{}", json(&rev)?);
    } else {
        println!("{}", rev);
    }
    Ok(())
}
