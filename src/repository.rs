//! # High-Level Repository Management
//!
//! This module provides the `RepositoryManager`, the single entry point the
//! CLI (or any embedding application) uses to work with a working copy
//! without caring which VCS manages it.
//!
//! ## Design
//!
//! The manager owns one [`ProcessRunner`] and one backend per supported VCS,
//! all sharing that runner. Every operation takes the [`VcsKind`] to use:
//! callers either know it already (`--vcs`) or ask [`RepositoryManager::which_vcs`]
//! first. Swapping the runner for a mock makes the whole stack testable
//! without any VCS installed.

use std::path::Path;
use std::sync::Arc;

use crate::backend::bazaar::Bazaar;
use crate::backend::git::Git;
use crate::backend::mercurial::Mercurial;
use crate::backend::subversion::Subversion;
use crate::backend::Backend;
use crate::commit::Commit;
use crate::error::Result;
use crate::process::{ProcessRunner, SystemRunner};
use crate::resolver;
use crate::vcs::VcsKind;

/// The main entry point for working with repositories.
pub struct RepositoryManager {
    git: Git,
    mercurial: Mercurial,
    bazaar: Bazaar,
    subversion: Subversion,
}

impl RepositoryManager {
    /// Creates a manager running real commands with the default timeout.
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemRunner::default()))
    }

    /// Creates a manager whose backends all use `runner`.
    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            git: Git::new(runner.clone()),
            mercurial: Mercurial::new(runner.clone()),
            bazaar: Bazaar::new(runner.clone()),
            subversion: Subversion::new(runner),
        }
    }

    /// The backend driving `kind`.
    pub fn backend(&self, kind: VcsKind) -> &dyn Backend {
        match kind {
            VcsKind::Git => &self.git,
            VcsKind::Mercurial => &self.mercurial,
            VcsKind::Bazaar => &self.bazaar,
            VcsKind::Subversion => &self.subversion,
        }
    }

    /// The Subversion backend, for its repository metadata queries.
    pub fn subversion(&self) -> &Subversion {
        &self.subversion
    }

    fn backends(&self) -> [&dyn Backend; 4] {
        VcsKind::ALL.map(|kind| self.backend(kind))
    }

    /// Which VCS manages `path`.
    pub fn which_vcs(&self, path: &Path) -> Result<VcsKind> {
        resolver::resolve(&self.backends(), path)
    }

    pub fn list_tags(&self, kind: VcsKind, path: &Path) -> Result<Vec<String>> {
        self.backend(kind).list_tags(path)
    }

    pub fn is_clean(&self, kind: VcsKind, path: &Path) -> Result<bool> {
        self.backend(kind).is_clean(path)
    }

    pub fn create_tag(&self, kind: VcsKind, path: &Path, tag: &str, message: &str) -> Result<String> {
        self.backend(kind).create_tag(path, tag, message)
    }

    pub fn list_commits_between(
        &self,
        kind: VcsKind,
        path: &Path,
        since: &str,
        until: &str,
    ) -> Result<Vec<Commit>> {
        self.backend(kind).list_commits_between(path, since, until)
    }

    pub fn first_revision(&self, kind: VcsKind, path: &Path) -> Result<String> {
        self.backend(kind).first_revision(path)
    }

    pub fn tag_revision(&self, kind: VcsKind, path: &Path, tag: &str) -> Result<Option<String>> {
        self.backend(kind).tag_revision(path, tag)
    }

    pub fn add(&self, kind: VcsKind, path: &Path, file: &str) -> Result<()> {
        self.backend(kind).add(path, file)
    }

    pub fn commit(&self, kind: VcsKind, path: &Path, message: &str, files: &[&str]) -> Result<()> {
        self.backend(kind).commit(path, message, files)
    }
}

impl Default for RepositoryManager {
    fn default() -> Self {
        Self::new()
    }
}
