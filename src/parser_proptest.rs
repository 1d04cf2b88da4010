//! Property-based tests for the log parsers and tag normalization.
//!
//! These tests use proptest to generate arbitrary tool output and tag lists
//! and check the invariants every parser and sorter must keep.

#[cfg(test)]
mod proptest_tests {
    use crate::commit::Commit;
    use crate::parser::{bazaar, git, mercurial, subversion};
    use crate::version::{parse_semver_tag, sort_semver_tags};
    use proptest::prelude::*;

    fn check_commits(commits: &[Commit]) -> Result<(), TestCaseError> {
        for commit in commits {
            prop_assert!(!commit.revision.is_empty(), "emitted a commit without revision");
            if let Some(message) = &commit.message {
                for line in message.split('\n') {
                    prop_assert!(!line.trim().is_empty(), "blank message line in {:?}", message);
                }
            }
        }
        Ok(())
    }

    /// Lines that look like log output, mixed with noise.
    fn log_lines() -> impl Strategy<Value = String> {
        let line = prop_oneof![
            Just("commit abc123".to_string()),
            Just("Author: Jane <jane@example.com>".to_string()),
            Just("Date:   Mon May 16 11:56:03 2016 +0200".to_string()),
            Just("changeset:   3:6f1e2d3c4b5a".to_string()),
            Just("user:        Jane <jane@example.com>".to_string()),
            Just("description:".to_string()),
            Just("revno: 4".to_string()),
            Just("committer: Jane <jane@example.com>".to_string()),
            Just("message:".to_string()),
            Just("-----------------".to_string()),
            Just("r7 | jane | 2016-05-16 11:56:03 +0200 (Mon, 16 May 2016) | 1 line".to_string()),
            Just(String::new()),
            "[ ]{0,4}[a-zA-Z0-9 :<>@|.-]{0,30}",
        ];
        prop::collection::vec(line, 0..40).prop_map(|lines| lines.join("\n"))
    }

    // ============================================================================
    // Parser properties
    // ============================================================================

    proptest! {
        /// Property: parsers never panic and never emit revision-less commits
        #[test]
        fn parsers_are_total(input in ".*") {
            check_commits(&git::parse(&input))?;
            check_commits(&mercurial::parse(&input))?;
            check_commits(&bazaar::parse(&input))?;
            check_commits(&subversion::parse(&input))?;
        }

        /// Property: structured input keeps the invariants too
        #[test]
        fn parsers_keep_invariants_on_log_like_input(input in log_lines()) {
            check_commits(&git::parse(&input))?;
            check_commits(&mercurial::parse(&input))?;
            check_commits(&bazaar::parse(&input))?;
            check_commits(&subversion::parse(&input))?;
        }
    }

    // ============================================================================
    // Tag sorting properties
    // ============================================================================

    proptest! {
        /// Property: sorting is a permutation of the input
        #[test]
        fn sort_keeps_every_tag(tags in prop::collection::vec("v?[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?|[a-z]{1,6}", 0..20)) {
            let mut sorted = sort_semver_tags(&tags);
            let mut original = tags.clone();
            sorted.sort();
            original.sort();
            prop_assert_eq!(sorted, original);
        }

        /// Property: valid versions come first, in non-decreasing order
        #[test]
        fn sort_orders_valid_before_invalid(tags in prop::collection::vec("v?[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?|[a-z]{1,6}", 0..20)) {
            let sorted = sort_semver_tags(&tags);
            let versions: Vec<_> = sorted.iter().map(|t| parse_semver_tag(t)).collect();
            let valid = versions.iter().take_while(|v| v.is_some()).count();
            prop_assert!(versions[valid..].iter().all(|v| v.is_none()));
            for pair in versions[..valid].windows(2) {
                if let (Some(a), Some(b)) = (&pair[0], &pair[1]) {
                    prop_assert!(a.cmp_precedence(b) != std::cmp::Ordering::Greater);
                }
            }
        }
    }
}
