//! # Tag Normalization
//!
//! Release tags are only useful to callers when they can be compared. This
//! module recognizes tags that are semantic versions, with or without a
//! leading `v`, and orders tag lists by semver precedence.
//!
//! Tags are always returned in their original spelling: `v1.2.0` stays
//! `v1.2.0` even though it is compared as `1.2.0`.

use semver::Version;

/// Parse a tag as a semantic version, accepting an optional `v` prefix.
pub fn parse_semver_tag(tag: &str) -> Option<Version> {
    let tag = tag.strip_prefix("refs/tags/").unwrap_or(tag);
    let version = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(version).ok()
}

/// Keep only tags that are semantic versions.
pub fn filter_semver_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter(|tag| parse_semver_tag(tag).is_some())
        .cloned()
        .collect()
}

/// Sort tags ascending by semver precedence.
///
/// Tags that are not semantic versions follow, in their original relative
/// order. Equal versions spelled differently (`1.0.0`, `v1.0.0`) keep their
/// relative order too.
pub fn sort_semver_tags(tags: &[String]) -> Vec<String> {
    let mut valid: Vec<(Version, &String)> = Vec::new();
    let mut invalid: Vec<&String> = Vec::new();
    for tag in tags {
        match parse_semver_tag(tag) {
            Some(version) => valid.push((version, tag)),
            None => invalid.push(tag),
        }
    }
    valid.sort_by(|(a, _), (b, _)| a.cmp_precedence(b));

    valid
        .into_iter()
        .map(|(_, tag)| tag)
        .chain(invalid)
        .cloned()
        .collect()
}

/// Reverse the tag list in place.
pub fn reverse_tags(tags: &mut [String]) {
    tags.reverse();
}
