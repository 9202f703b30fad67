//! repath - Express-style route paths compiled to regexes and path builders
//!
//! A route source such as `/user/:id` or `/:ext(json|xml)+` is tokenized
//! once and turned into either a matching [`PathRegex`] (with one [`Key`]
//! per capture group) or a [`PathBuilder`] that renders concrete paths from
//! parameter values.
//!
//! ```
//! use repath::{Options, Params, PathBuilder, PathRegex};
//!
//! let options = Options::default();
//! let re = PathRegex::new("/:test+", &options).unwrap();
//! let m = re.exec("/some/basic/route").unwrap().unwrap();
//! assert_eq!(m.get("test"), Some("some/basic/route"));
//!
//! let to_path = PathBuilder::new("/:test+", &options).unwrap();
//! let params = Params::new().with("test", vec!["a", "b", "c"]);
//! assert_eq!(to_path.build(&params).unwrap(), "/a/b/c");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use crate::core::models::{Key, Options, Param, Params, PathSpec, Token, Value};
pub use crate::core::services::{
    PathBuilder, PathMatch, PathRegex, compile, escape_capture, escape_literal, path_to_regex,
    tokenize, tokens_to_function, tokens_to_regex, tokens_to_source,
};
pub use crate::error::{Error, Result};
