//! # VCS Resolution
//!
//! Decides which VCS manages a directory by asking every backend the same
//! question. Each check is an independent read-only command and is spawned as
//! its own task inside a `rayon::scope`, so no check waits on another one
//! being split off. Every task writes only its own slot; the answers are then
//! read back in backend order so the outcome never depends on scheduling.
//!
//! Exactly one positive answer resolves the path. None is
//! [`Error::NotAVcs`]; several is [`Error::AmbiguousVcs`], listing every
//! claimant.

use std::path::Path;

use log::debug;

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::vcs::VcsKind;

/// The answer of one backend probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProbeResult {
    kind: VcsKind,
    managed: bool,
}

/// Resolve the single VCS managing `path`.
pub fn resolve(backends: &[&dyn Backend], path: &Path) -> Result<VcsKind> {
    let mut results: Vec<ProbeResult> = backends
        .iter()
        .map(|backend| ProbeResult {
            kind: backend.kind(),
            managed: false,
        })
        .collect();

    rayon::scope(|s| {
        for (slot, backend) in results.iter_mut().zip(backends) {
            s.spawn(move |_| slot.managed = backend.is_managed(path));
        }
    });

    let mut found: Vec<VcsKind> = results
        .iter()
        .filter(|r| r.managed)
        .map(|r| r.kind)
        .collect();
    found.sort();
    debug!("probes at {}: {:?}", path.display(), found);

    match found.as_slice() {
        [] => Err(Error::NotAVcs {
            path: path.to_path_buf(),
        }),
        [kind] => Ok(*kind),
        _ => Err(Error::AmbiguousVcs {
            path: path.to_path_buf(),
            kinds: found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::Commit;

    /// A backend whose probe answer is fixed.
    struct Fixed {
        kind: VcsKind,
        managed: bool,
    }

    impl Backend for Fixed {
        fn kind(&self) -> VcsKind {
            self.kind
        }
        fn is_managed(&self, _path: &Path) -> bool {
            self.managed
        }
        fn list_tags(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
        fn is_clean(&self, _path: &Path) -> Result<bool> {
            Ok(true)
        }
        fn create_tag(&self, _path: &Path, _tag: &str, _message: &str) -> Result<String> {
            Ok(String::new())
        }
        fn list_commits_between(&self, _: &Path, _: &str, _: &str) -> Result<Vec<Commit>> {
            Ok(Vec::new())
        }
        fn first_revision(&self, _path: &Path) -> Result<String> {
            Ok("1".to_string())
        }
        fn tag_revision(&self, _path: &Path, _tag: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn add(&self, _path: &Path, _file: &str) -> Result<()> {
            Ok(())
        }
        fn commit(&self, _path: &Path, _message: &str, _files: &[&str]) -> Result<()> {
            Ok(())
        }
    }

    fn backends(managed: [bool; 4]) -> Vec<Fixed> {
        VcsKind::ALL
            .iter()
            .zip(managed)
            .map(|(&kind, managed)| Fixed { kind, managed })
            .collect()
    }

    fn run(managed: [bool; 4]) -> Result<VcsKind> {
        let owned = backends(managed);
        let refs: Vec<&dyn Backend> = owned.iter().map(|b| b as &dyn Backend).collect();
        resolve(&refs, Path::new("/somewhere"))
    }

    #[test]
    fn test_single_match() {
        assert_eq!(run([false, true, false, false]).unwrap(), VcsKind::Mercurial);
        assert_eq!(run([false, false, false, true]).unwrap(), VcsKind::Subversion);
    }

    #[test]
    fn test_no_match() {
        match run([false; 4]) {
            Err(Error::NotAVcs { path }) => assert_eq!(path, Path::new("/somewhere")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_lists_kinds_in_order() {
        match run([true, false, false, true]) {
            Err(Error::AmbiguousVcs { kinds, .. }) => {
                assert_eq!(kinds, vec![VcsKind::Git, VcsKind::Subversion])
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_all_match() {
        match run([true; 4]) {
            Err(Error::AmbiguousVcs { kinds, .. }) => assert_eq!(kinds, VcsKind::ALL.to_vec()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_every_backend_is_asked_once() {
        use crate::backend::bazaar::Bazaar;
        use crate::backend::git::Git;
        use crate::backend::mercurial::Mercurial;
        use crate::backend::subversion::Subversion;
        use crate::process::mock::MockRunner;
        use std::sync::Arc;

        let runner = Arc::new(MockRunner::new().ok("svn", &["list"], "trunk/\n"));
        let git = Git::new(runner.clone());
        let hg = Mercurial::new(runner.clone());
        let bzr = Bazaar::new(runner.clone());
        let svn = Subversion::new(runner.clone());
        let refs: Vec<&dyn Backend> = vec![&git, &hg, &bzr, &svn];
        assert_eq!(
            resolve(&refs, Path::new("/repo")).unwrap(),
            VcsKind::Subversion
        );

        let mut programs: Vec<String> = runner
            .calls()
            .iter()
            .filter_map(|c| c.split_whitespace().next().map(str::to_string))
            .collect();
        programs.sort();
        assert_eq!(programs, vec!["bzr", "git", "hg", "svn"]);
    }

    #[test]
    fn test_missing_tools_count_as_not_managed() {
        use crate::backend::git::Git;
        use crate::backend::mercurial::Mercurial;
        use crate::process::mock::MockRunner;
        use std::sync::Arc;

        let runner = Arc::new(
            MockRunner::new()
                .missing("git")
                .ok("hg", &["status"], ""),
        );
        let git = Git::new(runner.clone());
        let hg = Mercurial::new(runner);
        let refs: Vec<&dyn Backend> = vec![&git, &hg];
        assert_eq!(
            resolve(&refs, Path::new("/repo")).unwrap(),
            VcsKind::Mercurial
        );
    }
}
