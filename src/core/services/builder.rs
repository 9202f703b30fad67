//! Path builder - substitutes parameter values back into a route
//!
//! ```
//! use repath::{Options, Params, PathBuilder};
//!
//! let to_path = PathBuilder::new("/user/:id", &Options::default()).unwrap();
//! assert_eq!(to_path.build(&Params::new().with("id", 123)).unwrap(), "/user/123");
//! assert!(to_path.build(&Params::new()).is_err());
//! ```

use fancy_regex::Regex;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::tokenizer::tokenize;
use crate::core::models::{Options, Param, Params, Token, Value};
use crate::error::{Error, Result};

/// Bytes escaped in list elements: everything but RFC 3986 unreserved
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Bytes escaped in scalar values: list set minus `! * ' ( )`
const COMPONENT: &AsciiSet =
    &SEGMENT.remove(b'!').remove(b'*').remove(b'\'').remove(b'(').remove(b')');

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param { param: Param, matcher: Regex },
}

/// Reverse of a [`PathRegex`](crate::PathRegex): renders concrete paths
#[derive(Debug, Clone)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Tokenize a route source and prepare a builder for it
    pub fn new(source: &str, options: &Options) -> Result<Self> {
        Self::from_tokens(&tokenize(source), options)
    }

    /// Prepare a builder from tokens
    ///
    /// Each parameter's `^pattern$` validator is compiled here, so building
    /// can only fail on the values themselves.
    pub fn from_tokens(tokens: &[Token], options: &Options) -> Result<Self> {
        let segments = tokens
            .iter()
            .map(|token| match token {
                Token::Literal(text) => Ok(Segment::Literal(text.clone())),
                Token::Param(param) => Ok(Segment::Param {
                    param: param.clone(),
                    matcher: validator(&param.pattern, options)?,
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// Render a path from parameter values
    pub fn build(&self, params: &Params) -> Result<String> {
        let mut path = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param { param, matcher } => {
                    push_param(&mut path, param, matcher, params.get(&param.name))?;
                },
            }
        }

        Ok(path)
    }
}

fn validator(pattern: &str, options: &Options) -> Result<Regex> {
    let flags = if options.sensitive { "" } else { "(?i)" };
    let source = format!("{flags}^{pattern}$");
    Regex::new(&source).map_err(|e| Error::regex(source.as_str(), e))
}

fn push_param(
    path: &mut String,
    param: &Param,
    matcher: &Regex,
    value: Option<&Value>,
) -> Result<()> {
    let name = || param.name.clone();

    match value {
        None | Some(Value::Null) => {
            if param.optional {
                Ok(())
            } else {
                Err(Error::MissingRequiredParameter { name: name() })
            }
        },
        Some(Value::List(values)) => {
            if !param.repeat {
                return Err(Error::ParameterNotRepeatable { name: name() });
            }
            if values.is_empty() {
                return if param.optional {
                    Ok(())
                } else {
                    Err(Error::EmptyRequiredList { name: name() })
                };
            }

            for (i, value) in values.iter().enumerate() {
                if !accepts(matcher, value)? {
                    log::trace!("rejected {value:?} for repeated parameter {}", param.name);
                    return Err(Error::PatternMismatch {
                        name: name(),
                        pattern: param.pattern.clone(),
                        repeat: true,
                    });
                }
                if i == 0 {
                    path.push_str(&param.prefix);
                } else {
                    path.push(param.delimiter);
                }
                path.extend(utf8_percent_encode(value, SEGMENT));
            }
            Ok(())
        },
        Some(Value::Single(value)) => {
            if !accepts(matcher, value)? {
                log::trace!("rejected {value:?} for parameter {}", param.name);
                return Err(Error::PatternMismatch {
                    name: name(),
                    pattern: param.pattern.clone(),
                    repeat: false,
                });
            }
            path.push_str(&param.prefix);
            path.extend(utf8_percent_encode(value, COMPONENT));
            Ok(())
        },
    }
}

fn accepts(matcher: &Regex, value: &str) -> Result<bool> {
    matcher.is_match(value).map_err(|e| Error::regex(matcher.as_str(), e))
}

/// Tokenize a route source and prepare a builder with default options
pub fn compile(source: &str) -> Result<PathBuilder> {
    PathBuilder::new(source, &Options::default())
}

/// Prepare a builder from tokens with default options
pub fn tokens_to_function(tokens: &[Token]) -> Result<PathBuilder> {
    PathBuilder::from_tokens(tokens, &Options::default())
}
