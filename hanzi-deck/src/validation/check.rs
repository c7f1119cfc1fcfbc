//! Primitive format checks shared by the deck and character validators.
//!
//! Every function here is total and pure: no panics, no state, no knowledge
//! of the document shape.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a hyphenated identifier: five case-insensitive groups of
/// hexadecimal digits in an 8-4-4-4-12 grouping.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("identifier pattern should compile")
});

/// Matches a two-component numeric version such as `1.0`.
static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("version pattern should compile"));

/// Checks whether `s` is a well-formed deck or character identifier.
///
/// # Examples
///
/// ```
/// use hanzi_deck::validation::check::is_valid_identifier;
///
/// assert!(is_valid_identifier("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!is_valid_identifier("not-an-identifier"));
/// ```
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Checks whether `s` is a well-formed two-component version string.
///
/// # Examples
///
/// ```
/// use hanzi_deck::validation::check::is_valid_version;
///
/// assert!(is_valid_version("1.0"));
/// assert!(!is_valid_version("1.0.0"));
/// ```
pub fn is_valid_version(s: &str) -> bool {
    VERSION.is_match(s)
}

/// Checks whether `n` lies within the closed interval `[lo, hi]`.
pub fn in_range(n: i64, lo: i64, hi: i64) -> bool {
    lo <= n && n <= hi
}

/// Checks whether the length of `s` lies within the closed interval
/// `[lo, hi]`.
///
/// Lengths are counted in codepoints, not bytes: deck content is dominated
/// by multi-byte scripts, and a byte count would reject names well within
/// their limits.
pub fn length_within(s: &str, lo: usize, hi: usize) -> bool {
    let length = s.chars().count();
    lo <= length && length <= hi
}
