//! Compilation services
//!
//! Pure logic that operates on route sources and tokens.
//! Nothing here performs I/O.
//!
//! - [`escape`] - Regex escaping for literals and capture fragments
//! - [`tokenizer`] - Route source to tokens
//! - [`compiler`] - Tokens (or lists, or regexes) to a matching regex
//! - [`builder`] - Tokens to a path builder

pub mod builder;
pub mod compiler;
pub mod escape;
pub mod tokenizer;

pub use builder::{PathBuilder, compile, tokens_to_function};
pub use compiler::{PathMatch, PathRegex, path_to_regex, tokens_to_regex, tokens_to_source};
pub use escape::{escape_capture, escape_literal};
pub use tokenizer::tokenize;
