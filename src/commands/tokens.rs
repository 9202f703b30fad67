//! Show the tokens a route is parsed into

use repath::output::{OutputMode, TokensResult};

/// Tokenize a route and print the tokens
pub fn tokens(path: &str, mode: OutputMode) -> anyhow::Result<()> {
    let result = TokensResult {
        path: path.to_string(),
        tokens: repath::tokenize(path),
    };
    result.render(mode);
    Ok(())
}
