//! Regex escaping for literal text and capture fragments

use std::sync::LazyLock;

use regex::Regex;

/// Characters escaped when literal route text is embedded in a regex
static LITERAL_SPECIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.+*?=^!:${}()\[\]|\\])").expect("literal escape regex is valid")
});

/// Characters escaped inside a user-supplied capture fragment
static CAPTURE_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([=!:$()])").expect("capture escape regex is valid"));

/// Escape literal text so it matches itself inside a larger regex
#[must_use]
pub fn escape_literal(input: &str) -> String {
    LITERAL_SPECIALS.replace_all(input, r"\$1").into_owned()
}

/// Escape a capture fragment so it cannot open or close groups
///
/// Character classes and quantifiers keep their meaning: `\d+` and
/// `[a-z]{2}` pass through untouched.
#[must_use]
pub fn escape_capture(input: &str) -> String {
    CAPTURE_SPECIALS.replace_all(input, r"\$1").into_owned()
}
