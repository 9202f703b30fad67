//! Compile options

use serde::{Deserialize, Serialize};

/// Options controlling how a route compiles
///
/// Every field has a default, so a partial TOML table or JSON object
/// deserialises into a complete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Match letter case exactly (default: case-insensitive)
    pub sensitive: bool,
    /// Trailing slash must appear exactly as written (default: optional)
    pub strict: bool,
    /// Pattern must consume the whole candidate (default: true)
    pub end: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            end: true,
        }
    }
}

impl Options {
    /// Set case sensitivity
    #[must_use]
    pub const fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Set strict trailing-slash handling
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set end anchoring
    #[must_use]
    pub const fn end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }
}
