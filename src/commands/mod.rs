//! Command implementations

mod build;
mod match_paths;
mod regex_cmd;
mod tokens;

pub use build::build;
pub use match_paths::match_paths;
pub use regex_cmd::regex_cmd;
pub use tokens::tokens;
