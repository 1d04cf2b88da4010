//! # List Tags Command Implementation
//!
//! Prints the tags of the working copy, semver-sorted with any non-semver
//! tags last. By default only semantic-version tags are shown.

use anyhow::Result;
use clap::Args;

use repo_utils::output::render_tags;
use repo_utils::version::{filter_semver_tags, reverse_tags, sort_semver_tags};

use super::Context;

/// List the tags of the working copy
#[derive(Args, Debug)]
pub struct ListTagsArgs {
    /// Print a JSON array
    #[arg(short, long)]
    pub json: bool,

    /// Keep tags that are not semantic versions
    #[arg(short, long)]
    pub any: bool,

    /// Newest first
    #[arg(short, long)]
    pub reverse: bool,
}

/// Apply the listing options to raw tag names.
pub fn select_tags(tags: &[String], args: &ListTagsArgs) -> Vec<String> {
    let tags = if args.any {
        tags.to_vec()
    } else {
        filter_semver_tags(tags)
    };
    let mut tags = sort_semver_tags(&tags);
    if args.reverse {
        reverse_tags(&mut tags);
    }
    tags
}

pub fn execute(args: &ListTagsArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.kind()?;
    let tags = ctx.manager.list_tags(kind, &ctx.path)?;
    let tags = select_tags(&tags, args);
    let rendered = render_tags(&tags, args.json)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
