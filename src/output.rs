//! # Output Configuration
//!
//! Rendering of command results for the CLI, plus the color policy used for
//! human-readable answers.
//!
//! Machine-readable output (`-j`) is plain JSON produced by `serde_json` and
//! never colored. Human-readable output may be styled with `console` when
//! color is enabled.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;
use serde::Serialize;

use crate::commit::Commit;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag.
    ///
    /// `always` forces colors on even with `NO_COLOR`, `never` forces them
    /// off, anything else detects support from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone counts, even when empty.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Render a value as compact JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// `yes` or `no`, green or red when color is enabled.
pub fn yes_no(config: &OutputConfig, answer: bool) -> String {
    let text = if answer { "yes" } else { "no" };
    if !config.use_color {
        return text.to_string();
    }
    let styled = if answer {
        style(text).green()
    } else {
        style(text).red()
    };
    styled.force_styling(true).to_string()
}

/// Tags as a JSON array, or one per line.
pub fn render_tags(tags: &[String], as_json: bool) -> serde_json::Result<String> {
    if as_json {
        json(tags)
    } else {
        Ok(tags.join("\n"))
    }
}

/// Commits as indented JSON.
pub fn render_commits(commits: &[Commit]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(commits)
}
