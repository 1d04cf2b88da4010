//! # Repo Utils Library
//!
//! A uniform interface over four version-control systems: Git, Mercurial,
//! Bazaar and Subversion. It detects which VCS manages a directory, then
//! lists tags and commits, checks for uncommitted changes and creates tags,
//! all by driving each tool's command-line client.
//!
//! ## Quick Example
//!
//! ```
//! use repo_utils::parser;
//! use repo_utils::version::sort_semver_tags;
//!
//! let log = "commit 1a2b3c\nAuthor: Jane Doe <jane@example.com>\nDate:   Mon May 16 11:56:03 2016 +0200\n\n    fix bug\n";
//! let commits = parser::git::parse(log);
//! assert_eq!(commits[0].revision, "1a2b3c");
//! assert_eq!(commits[0].message.as_deref(), Some("fix bug"));
//!
//! let tags: Vec<String> = vec!["1.10.0".into(), "v1.2.0".into(), "nightly".into()];
//! assert_eq!(sort_semver_tags(&tags), vec!["v1.2.0", "1.10.0", "nightly"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Process execution (`process`)**: every VCS command goes through a
//!   `ProcessRunner`, so the whole stack can run against a mock.
//! - **Backends (`backend`)**: one type per VCS implementing the `Backend`
//!   trait, which encodes the tool's command vocabulary.
//! - **Log parsers (`parser`)**: turn each tool's log text into `Commit`
//!   records.
//! - **Resolution (`resolver`)**: probes every backend concurrently and
//!   accepts exactly one match.
//! - **Repository management (`repository`)**: the `RepositoryManager`
//!   façade tying backends and resolution together.
//! - **Tags and commits (`version`, `commit`)**: semver filtering and sorting
//!   of tags, date ordering of commits.

pub mod backend;
pub mod commit;
pub mod defaults;
pub mod error;
pub mod output;
pub mod parser;
pub mod process;
pub mod repository;
pub mod resolver;
pub mod suggestions;
pub mod vcs;
pub mod version;

#[cfg(test)]
mod parser_proptest;
