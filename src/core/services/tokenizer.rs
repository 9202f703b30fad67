//! Route source tokenizer
//!
//! Splits a source such as `/:ext(json|xml)+` into literal runs and
//! parameter descriptors. Every string tokenizes; text that is not an escape,
//! parameter or wildcard is simply literal.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_capture;
use crate::core::models::{Param, Token};

/// Scanner for escapes, parameters and wildcards
///
/// Groups:
/// 1. escaped character (`\x`)
/// 2. prefix (`/` or `.`)
/// 3. parameter name
/// 4. custom capture following a name
/// 5. unnamed capture
/// 6. modifier (`+`, `*`, `?`)
/// 7. wildcard (`*`)
static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(\\.)",
        "|",
        r"([/.])?(?:(?::(\w+)(?:\(((?:\\.|[^()])+)\))?|\(((?:\\.|[^()])+)\))([+*?])?|(\*))",
    ))
    .expect("path tokenizer regex is valid")
});

/// Tokenize a route source
///
/// Unnamed captures are numbered from 0 in the order they appear.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut key = 0usize;
    let mut index = 0;
    let mut path = String::new();

    for caps in PATH_REGEX.captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        path.push_str(&source[index..whole.start()]);
        index = whole.end();

        if let Some(escaped) = caps.get(1) {
            path.push_str(&escaped.as_str()[1..]);
            continue;
        }

        if !path.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut path)));
        }

        tokens.push(Token::Param(param_from(&caps, &mut key)));
    }

    path.push_str(&source[index..]);
    if !path.is_empty() {
        tokens.push(Token::Literal(path));
    }

    log::debug!("tokenized {source:?} into {} token(s)", tokens.len());
    tokens
}

fn param_from(caps: &Captures<'_>, key: &mut usize) -> Param {
    let text = |i: usize| caps.get(i).map(|m| m.as_str());

    let prefix = text(2).unwrap_or("");
    let suffix = text(6);
    let asterisk = text(7).is_some();

    let name = text(3).map_or_else(
        || {
            let name = key.to_string();
            *key += 1;
            name
        },
        str::to_string,
    );

    let mut param = Param::new(name, prefix)
        .with_optional(matches!(suffix, Some("?" | "*")))
        .with_repeat(matches!(suffix, Some("+" | "*")));

    if let Some(capture) = text(4).or_else(|| text(5)) {
        param.pattern = capture.to_string();
    } else if asterisk {
        param.pattern = ".*".to_string();
    }
    param.pattern = escape_capture(&param.pattern);

    param
}
