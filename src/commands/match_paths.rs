//! Test candidate paths against a route

use anyhow::Context;
use repath::output::{MatchOutcome, MatchResult, OutputMode};
use repath::{Options, PathRegex};

/// Match each candidate against a route and print the captures
pub fn match_paths(
    pattern: &str,
    paths: &[String],
    options: &Options,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let compiled =
        PathRegex::new(pattern, options).with_context(|| format!("failed to compile {pattern}"))?;

    let results = paths
        .iter()
        .map(|path| {
            let found = compiled.exec(path)?;
            Ok(MatchOutcome {
                path: path.clone(),
                found,
            })
        })
        .collect::<repath::Result<Vec<_>>>()?;

    let result = MatchResult {
        regex: compiled.as_str().to_string(),
        results,
    };
    result.render(mode);

    if !result.any_matched() {
        log::info!("no candidate matched {pattern}");
    }
    Ok(())
}
