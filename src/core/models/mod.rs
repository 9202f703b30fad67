//! Domain models for repath
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Token`] - A literal run or a [`Param`] parsed from a route source
//! - [`Key`] - The public description of one capture group
//! - [`Options`] - Case, trailing-slash and end-anchoring switches
//! - [`PathSpec`] - A route, a list of routes, or a precompiled regex
//! - [`Value`] / [`Params`] - Values handed to a path builder

mod options;
mod path_spec;
mod token;
mod value;

pub use options::Options;
pub use path_spec::PathSpec;
pub use token::{Key, Param, Token};
pub use value::{Params, Value};
