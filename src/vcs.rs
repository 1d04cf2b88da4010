//! The closed set of supported version-control systems.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A version-control system `repo-utils` knows how to drive.
///
/// The declaration order is the order used whenever several kinds are
/// reported together, e.g. in an ambiguity error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VcsKind {
    Git,
    Mercurial,
    Bazaar,
    Subversion,
}

impl VcsKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [VcsKind; 4] = [
        VcsKind::Git,
        VcsKind::Mercurial,
        VcsKind::Bazaar,
        VcsKind::Subversion,
    ];

    /// Short name, also the name of the executable.
    pub fn as_str(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Mercurial => "hg",
            VcsKind::Bazaar => "bzr",
            VcsKind::Subversion => "svn",
        }
    }

    /// Name of the executable looked up on the search path.
    pub fn program(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcsKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "git" => Ok(VcsKind::Git),
            "hg" | "mercurial" => Ok(VcsKind::Mercurial),
            "bzr" | "bazaar" => Ok(VcsKind::Bazaar),
            "svn" | "subversion" => Ok(VcsKind::Subversion),
            _ => Err(Error::UnknownVcs {
                name: s.to_string(),
            }),
        }
    }
}
