//! Inputs accepted by the pattern compiler

use fancy_regex::Regex;

/// Something that can be compiled into a [`PathRegex`](crate::PathRegex)
#[derive(Debug, Clone)]
pub enum PathSpec {
    /// A route source such as `/user/:id`
    Path(String),
    /// Alternatives, matched as a single non-capturing alternation
    List(Vec<PathSpec>),
    /// A precompiled regex, passed through unchanged
    Regex(Regex),
}

impl PathSpec {
    /// Route source text, if this is a plain path
    #[must_use]
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::List(_) | Self::Regex(_) => None,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&String> for PathSpec {
    fn from(path: &String) -> Self {
        Self::Path(path.clone())
    }
}

impl From<Regex> for PathSpec {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

impl<T: Into<Self>> From<Vec<T>> for PathSpec {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
