//! Route compiler - turns tokens into a matching regex
//!
//! ```
//! use repath::{Options, PathRegex};
//!
//! let re = PathRegex::new("/user/:id", &Options::default()).unwrap();
//! assert_eq!(re.as_str(), "^/user/([^/]+?)(?:/(?=$))?$");
//!
//! let m = re.exec("/user/123").unwrap().unwrap();
//! assert_eq!(m.get("id"), Some("123"));
//! assert!(!re.is_match("/user/123/edit"));
//! ```

use fancy_regex::Regex;
use serde::Serialize;

use super::escape::escape_literal;
use super::tokenizer::tokenize;
use crate::core::models::{Key, Options, Param, PathSpec, Token};
use crate::error::{Error, Result};

/// A compiled route: the regex plus a key per capture group
#[derive(Debug, Clone)]
pub struct PathRegex {
    /// Regex source without the case-insensitivity flag
    source: String,
    /// Compiled regex
    regex: Regex,
    /// One key per capture group, in group order
    keys: Vec<Key>,
}

/// A successful match against a [`PathRegex`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathMatch {
    /// The matched prefix of the candidate
    pub matched: String,
    /// Each capture group's text, or `None` when it did not participate
    pub groups: Vec<Option<String>>,
    /// Key names paired with their captures, in key order
    pub params: Vec<(String, Option<String>)>,
}

impl PathMatch {
    /// First captured value for a key name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .filter(|(key, _)| key == name)
            .find_map(|(_, value)| value.as_deref())
    }
}

impl PathRegex {
    /// Compile a route, list of routes, or precompiled regex
    ///
    /// A precompiled regex is passed through unchanged (options are not
    /// applied to it); its unnamed groups become positional keys.
    pub fn new(spec: impl Into<PathSpec>, options: &Options) -> Result<Self> {
        match spec.into() {
            PathSpec::Regex(regex) => {
                let mut keys = Vec::new();
                let source = regex_to_source(&regex, &mut keys);
                Ok(Self { source, regex, keys })
            },
            spec => {
                let mut keys = Vec::new();
                let source = spec_to_source(&spec, &mut keys, options);
                Self::compile(source, keys, options)
            },
        }
    }

    /// Compile an already tokenized route
    pub fn from_tokens(tokens: &[Token], options: &Options) -> Result<Self> {
        let keys = tokens.iter().filter_map(Token::as_param).map(Key::from).collect();
        Self::compile(tokens_to_source(tokens, options), keys, options)
    }

    fn compile(source: String, keys: Vec<Key>, options: &Options) -> Result<Self> {
        let flagged =
            if options.sensitive { source.clone() } else { format!("(?i){source}") };
        let regex = Regex::new(&flagged).map_err(|e| Error::regex(flagged.as_str(), e))?;
        log::debug!("compiled route regex {source} with {} key(s)", keys.len());
        Ok(Self { source, regex, keys })
    }

    /// Regex source, without the case flag
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Capture group descriptors, in group order
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// The compiled regex
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Split into regex and keys
    #[must_use]
    pub fn into_parts(self) -> (Regex, Vec<Key>) {
        (self.regex, self.keys)
    }

    /// Match a candidate anchored at its start
    pub fn exec(&self, path: &str) -> Result<Option<PathMatch>> {
        let caps = self
            .regex
            .captures(path)
            .map_err(|e| Error::regex(self.regex.as_str(), e))?;
        let Some(caps) = caps else { return Ok(None) };
        let Some(whole) = caps.get(0).filter(|m| m.start() == 0) else {
            return Ok(None);
        };

        let groups: Vec<Option<String>> =
            (1..caps.len()).map(|i| caps.get(i).map(|m| m.as_str().to_string())).collect();
        let params = self
            .keys
            .iter()
            .zip(&groups)
            .map(|(key, value)| (key.name.clone(), value.clone()))
            .collect();

        Ok(Some(PathMatch {
            matched: whole.as_str().to_string(),
            groups,
            params,
        }))
    }

    /// Check whether a candidate matches
    ///
    /// A regex runtime failure counts as no match and is logged.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        match self.exec(path) {
            Ok(found) => found.is_some(),
            Err(err) => {
                log::warn!("matching {path:?} failed: {err}");
                false
            },
        }
    }
}

impl std::fmt::Display for PathRegex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compile a route, list of routes, or precompiled regex
pub fn path_to_regex(spec: impl Into<PathSpec>, options: &Options) -> Result<PathRegex> {
    PathRegex::new(spec, options)
}

/// Compile an already tokenized route
pub fn tokens_to_regex(tokens: &[Token], options: &Options) -> Result<PathRegex> {
    PathRegex::from_tokens(tokens, options)
}

fn spec_to_source(spec: &PathSpec, keys: &mut Vec<Key>, options: &Options) -> String {
    match spec {
        PathSpec::Path(path) => {
            let tokens = tokenize(path);
            keys.extend(tokens.iter().filter_map(Token::as_param).map(Key::from));
            tokens_to_source(&tokens, options)
        },
        PathSpec::List(items) => {
            let parts: Vec<String> =
                items.iter().map(|item| spec_to_source(item, keys, options)).collect();
            format!("(?:{})", parts.join("|"))
        },
        PathSpec::Regex(regex) => regex_to_source(regex, keys),
    }
}

/// Record a positional key per unnamed group and return the regex source
fn regex_to_source(regex: &Regex, keys: &mut Vec<Key>) -> String {
    let source = regex.as_str();
    keys.extend((0..unnamed_groups(source)).map(Key::positional));
    source.to_string()
}

/// Count `(` not followed by `?`, skipping backslash escapes
fn unnamed_groups(source: &str) -> usize {
    let mut count = 0;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            },
            '(' if chars.peek() != Some(&'?') => count += 1,
            _ => {},
        }
    }
    count
}

/// Build the regex source for a token sequence
#[must_use]
pub fn tokens_to_source(tokens: &[Token], options: &Options) -> String {
    let ends_with_slash =
        matches!(tokens.last(), Some(Token::Literal(text)) if text.ends_with('/'));

    let mut route = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&escape_literal(text)),
            Token::Param(param) => route.push_str(&param_source(param)),
        }
    }

    if !options.strict {
        if ends_with_slash {
            route.pop();
        }
        route.push_str("(?:/(?=$))?");
    }

    if options.end {
        route.push('$');
    } else if !(options.strict && ends_with_slash) {
        route.push_str("(?=/|$)");
    }

    format!("^{route}")
}

fn param_source(param: &Param) -> String {
    let prefix = escape_literal(&param.prefix);
    let mut capture = param.pattern.clone();

    // Every repetition after the first carries the prefix
    if param.repeat {
        capture = format!("{capture}(?:{prefix}{capture})*");
    }

    match (param.optional, prefix.is_empty()) {
        (true, false) => format!("(?:{prefix}({capture}))?"),
        (true, true) => format!("({capture})?"),
        (false, _) => format!("{prefix}({capture})"),
    }
}
