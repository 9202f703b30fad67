//! Show the regex and keys a route compiles to

use anyhow::Context;
use repath::output::{OutputMode, RegexResult};
use repath::{Options, PathRegex, PathSpec};

/// Compile one route, or several as alternatives, and print the regex
pub fn regex_cmd(paths: &[String], options: &Options, mode: OutputMode) -> anyhow::Result<()> {
    let spec = match paths {
        [single] => PathSpec::from(single),
        many => PathSpec::from(many.to_vec()),
    };

    let compiled = PathRegex::new(spec, options)
        .with_context(|| format!("failed to compile {}", paths.join(", ")))?;

    let result = RegexResult {
        regex: compiled.as_str().to_string(),
        keys: compiled.keys().to_vec(),
    };
    result.render(mode);
    Ok(())
}
