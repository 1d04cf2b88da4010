//! # List Commits Command Implementation
//!
//! Prints the commits between two revisions as indented JSON.
//!
//! Ordering options:
//! - default: the order the VCS printed them in;
//! - `--reverse`: that order reversed;
//! - `--orderbydate`: oldest first, or newest first with `--reverse`.

use anyhow::Result;
use clap::Args;

use repo_utils::commit::{order_by_date, reverse, Commit, DateOrder};
use repo_utils::output::render_commits;

use super::Context;

/// List the commits between two revisions as JSON
#[derive(Args, Debug)]
pub struct ListCommitsArgs {
    /// Start revision or tag (exclusive); empty means the first revision
    #[arg(short, long, default_value = "")]
    pub since: String,

    /// End revision or tag
    #[arg(short, long, default_value = "HEAD")]
    pub until: String,

    /// Reverse the order
    #[arg(short, long)]
    pub reverse: bool,

    /// Sort by commit date
    #[arg(long)]
    pub orderbydate: bool,
}

/// Apply the ordering options in place.
pub fn arrange(commits: &mut [Commit], args: &ListCommitsArgs) {
    if args.orderbydate {
        let order = if args.reverse {
            DateOrder::Descending
        } else {
            DateOrder::Ascending
        };
        order_by_date(commits, order);
    } else if args.reverse {
        reverse(commits);
    }
}

pub fn execute(args: &ListCommitsArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.kind()?;
    let mut commits = ctx
        .manager
        .list_commits_between(kind, &ctx.path, &args.since, &args.until)?;
    arrange(&mut commits, args);
    println!("{}", render_commits(&commits)?);
    Ok(())
}
