//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for working copies and a `repo-utils`
//! command builder pointed at them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! #[cfg_attr(not(feature = "integration-tests"), ignore)]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git_repo();
//!     fixture.command().arg("which").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary directory, optionally turned into a working copy.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_git_repo()
///     .with_file("README.md", "hello")
///     .git_commit("initial import");
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Run `git init` with a local identity so commits work anywhere.
    pub fn with_git_repo(self) -> Self {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.name", "Jane Doe"]);
        self.git(&["config", "user.email", "jane@example.com"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git(&["config", "tag.gpgsign", "false"]);
        self
    }

    /// Stage everything and commit it.
    pub fn git_commit(self, message: &str) -> Self {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
        self
    }

    /// Create a lightweight tag at `HEAD`.
    pub fn git_tag(self, tag: &str) -> Self {
        self.git(&["tag", tag]);
        self
    }

    /// Run git in the fixture directory, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a `repo-utils` command pointed at this fixture with `--path`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repo-utils");
        cmd.env_remove("RUST_LOG")
            .env_remove("REPO_UTILS_PATH")
            .env_remove("REPO_UTILS_TIMEOUT")
            .env("NO_COLOR", "1")
            .arg("--path")
            .arg(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
