//! Error types for path compilation and building

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while compiling patterns or building paths
///
/// The first four variants are the only ways a [`PathBuilder`](crate::PathBuilder)
/// can reject a parameter set. The builder stops at the first violation.
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter was absent or null
    #[error("Expected \"{name}\" to be defined")]
    MissingRequiredParameter {
        /// Parameter name
        name: String,
    },

    /// A list was supplied for a parameter that does not repeat
    #[error("Expected \"{name}\" to not repeat")]
    ParameterNotRepeatable {
        /// Parameter name
        name: String,
    },

    /// An empty list was supplied for a required repeating parameter
    #[error("Expected \"{name}\" to not be empty")]
    EmptyRequiredList {
        /// Parameter name
        name: String,
    },

    /// A value (or one element of a list) did not match the parameter pattern
    #[error("Expected {}\"{name}\" to match \"{pattern}\"", quantifier(.repeat))]
    PatternMismatch {
        /// Parameter name
        name: String,
        /// The parameter's regex fragment
        pattern: String,
        /// Whether the rejected value was a list
        repeat: bool,
    },

    /// The regex engine rejected a generated pattern
    #[error("invalid pattern `{pattern}`: {source}")]
    Regex {
        /// Regex source that failed
        pattern: String,
        /// Underlying engine error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A configuration file could not be read or parsed
    #[error("invalid config {}: {message}", .path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

const fn quantifier(repeat: &bool) -> &'static str {
    if *repeat { "all " } else { "" }
}

impl Error {
    pub(crate) fn regex(pattern: impl Into<String>, source: fancy_regex::Error) -> Self {
        Self::Regex {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Name of the offending parameter, for build failures
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredParameter { name }
            | Self::ParameterNotRepeatable { name }
            | Self::EmptyRequiredList { name }
            | Self::PatternMismatch { name, .. } => Some(name),
            Self::Regex { .. } | Self::Config { .. } => None,
        }
    }
}
