//! # Create Tag Command Implementation
//!
//! Creates a tag after checking it does not exist yet. The message defaults
//! to `tag: <name>`; Bazaar ignores it.

use anyhow::Result;
use clap::Args;
use log::error;

use repo_utils::defaults::default_tag_message;
use repo_utils::error::Error;
use repo_utils::output::json;
use repo_utils::suggestions;

use super::Context;

/// Create a tag
#[derive(Args, Debug)]
pub struct CreateTagArgs {
    /// Name of the tag to create
    pub tag: String,

    /// Print JSON `true` instead of `done`
    #[arg(short, long)]
    pub json: bool,

    /// Tag message
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// The message actually passed to the VCS.
pub fn effective_message(args: &CreateTagArgs) -> String {
    if args.message.is_empty() {
        default_tag_message(&args.tag)
    } else {
        args.message.clone()
    }
}

pub fn execute(args: &CreateTagArgs, ctx: &Context) -> Result<()> {
    let kind = ctx.kind()?;
    let message = effective_message(args);
    match ctx.manager.create_tag(kind, &ctx.path, &args.tag, &message) {
        Ok(_) => {}
        Err(Error::CommandFailed { output, .. }) => {
            error!("{}", output.trim());
            return Err(suggestions::create_tag_failed(&args.tag, &output));
        }
        Err(e) => return Err(e.into()),
    }

    if args.json {
        println!("{}", json(&true)?);
    } else {
        println!("done");
    }
    Ok(())
}
