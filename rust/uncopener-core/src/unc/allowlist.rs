//! Allowed UNC prefix policy
//!
//! Prefixes compare case-insensitively against the candidate path.
//! A prefix ending in `\` names one directory: `\\server\share\` matches
//! `\\server\share\file` but not `\\server\share2\file`. Without the trailing
//! separator it is a plain text prefix, so `\\server\share` matches both.

/// Check a UNC path against the configured allowlist
///
/// An empty allowlist allows everything.
pub fn is_unc_allowed<S: AsRef<str>>(unc_path: &str, allowed_prefixes: &[S]) -> bool {
    if allowed_prefixes.is_empty() {
        return true;
    }

    let candidate = unc_path.to_lowercase();
    allowed_prefixes
        .iter()
        .any(|prefix| prefix_matches(&candidate, &prefix.as_ref().to_lowercase()))
}

/// `candidate` and `prefix` must already be lowercased
///
/// A trailing separator in `prefix` is what stops sibling matches, so both
/// modes reduce to a literal prefix test. An exact match is a prefix match.
fn prefix_matches(candidate: &str, prefix: &str) -> bool {
    candidate.starts_with(prefix)
}
