//! Token types produced by the tokenizer
//!
//! A route source like `/user/:id` becomes a [`Token::Literal`] (`/user`)
//! followed by a [`Token::Param`] describing the `:id` capture.

use serde::{Deserialize, Serialize};

/// A parameter descriptor parsed from a route source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Explicit name, or a stringified positional index for unnamed captures
    pub name: String,
    /// Delimiter character written before the parameter (`/`, `.` or empty)
    pub prefix: String,
    /// Separator placed between repeated values
    pub delimiter: char,
    /// Parameter may be omitted (`?` or `*` modifier)
    pub optional: bool,
    /// Parameter may repeat (`+` or `*` modifier)
    pub repeat: bool,
    /// Regex fragment a single value must satisfy
    pub pattern: String,
}

impl Param {
    /// Create a required, non-repeating parameter with the default pattern
    #[must_use]
    pub fn new(name: impl Into<String>, prefix: &str) -> Self {
        let delimiter = prefix.chars().next().unwrap_or('/');
        Self {
            name: name.into(),
            prefix: prefix.to_string(),
            delimiter,
            optional: false,
            repeat: false,
            pattern: format!("[^{delimiter}]+?"),
        }
    }

    /// Set the optional flag
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set the repeat flag
    #[must_use]
    pub const fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the regex fragment
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// The modifier suffix this parameter was written with
    #[must_use]
    pub const fn modifier(&self) -> &'static str {
        match (self.optional, self.repeat) {
            (true, true) => "*",
            (false, true) => "+",
            (true, false) => "?",
            (false, false) => "",
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}({}){}", self.prefix, self.name, self.pattern, self.modifier())
    }
}

/// One element of a tokenized route source
///
/// Serialises untagged: literals as plain strings, parameters as objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Verbatim text, never empty
    Literal(String),
    /// A capture
    Param(Param),
}

impl Token {
    /// The parameter, if this is a parameter token
    #[must_use]
    pub const fn as_param(&self) -> Option<&Param> {
        match self {
            Self::Param(param) => Some(param),
            Self::Literal(_) => None,
        }
    }

    /// The text, if this is a literal token
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Param(_) => None,
        }
    }
}

impl From<Param> for Token {
    fn from(param: Param) -> Self {
        Self::Param(param)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

/// Externally visible description of one capture group
///
/// Keys derived from a precompiled regex only know their position, so every
/// field other than `name` is absent for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Parameter name (or positional index)
    pub name: String,
    /// Prefix, when known
    pub prefix: Option<String>,
    /// Delimiter, when known
    pub delimiter: Option<char>,
    /// Whether the group may be absent
    pub optional: bool,
    /// Whether the group may repeat
    pub repeat: bool,
    /// Regex fragment, when known
    pub pattern: Option<String>,
}

impl Key {
    /// A key for the `index`-th unnamed group of a precompiled regex
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self {
            name: index.to_string(),
            prefix: None,
            delimiter: None,
            optional: false,
            repeat: false,
            pattern: None,
        }
    }
}

impl From<&Param> for Key {
    fn from(param: &Param) -> Self {
        Self {
            name: param.name.clone(),
            prefix: Some(param.prefix.clone()),
            delimiter: Some(param.delimiter),
            optional: param.optional,
            repeat: param.repeat,
            pattern: Some(param.pattern.clone()),
        }
    }
}
