use glob::{MatchOptions, Pattern};
use tracing::warn;

/// Matching options for ignore patterns: case-sensitive, and `*` never
/// crosses a `/`. Crossing segment boundaries takes an explicit `**`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled set of ignore patterns.
///
/// Patterns that fail to compile are dropped with a warning; a typo in the
/// config must never start ignoring everything.
pub struct IgnoreMatcher {
    patterns: Vec<Pattern>,
}

impl IgnoreMatcher {
    /// Compiles `patterns` into a matcher.
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern = %raw, error = %e, "skipping invalid ignore pattern");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Returns true if `path` (relative to the scan root) matches any
    /// pattern.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(path, MATCH_OPTIONS))
    }
}

/// Returns true iff `path` matches at least one of `patterns`.
///
/// OR semantics: pattern order never changes the result. Prefer building an
/// [`IgnoreMatcher`] when checking many paths against the same set.
#[must_use]
pub fn should_ignore(path: &str, patterns: &[String]) -> bool {
    IgnoreMatcher::new(patterns).is_match(path)
}
