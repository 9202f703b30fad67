//! Build a path from parameter values

use anyhow::{Context, bail};
use repath::output::{BuildResult, OutputMode};
use repath::{Options, Params, PathBuilder, Value};

/// Build a path from `NAME=VALUE` pairs and/or a JSON object
///
/// Repeating a name collects its values into a list. Pairs are applied
/// after the JSON object, so they win on conflicts.
pub fn build(
    pattern: &str,
    pairs: &[String],
    json: Option<&str>,
    options: &Options,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut params = match json {
        Some(text) => {
            let value: serde_json::Value =
                serde_json::from_str(text).context("--params is not valid JSON")?;
            Params::try_from(value).map_err(anyhow::Error::msg)?
        },
        None => Params::new(),
    };

    for (name, value) in parse_pairs(pairs)? {
        params.insert(name, value);
    }

    let builder = PathBuilder::new(pattern, options)
        .with_context(|| format!("failed to compile {pattern}"))?;
    let path = builder.build(&params)?;

    BuildResult { path }.render(mode);
    Ok(())
}

fn parse_pairs(pairs: &[String]) -> anyhow::Result<Vec<(String, Value)>> {
    let mut collected: Vec<(String, Vec<String>)> = Vec::new();

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("expected NAME=VALUE, got {pair:?}");
        };
        match collected.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => collected.push((name.to_string(), vec![value.to_string()])),
        }
    }

    Ok(collected
        .into_iter()
        .map(|(name, mut values)| {
            let value = if values.len() == 1 {
                Value::Single(values.remove(0))
            } else {
                Value::List(values)
            };
            (name, value)
        })
        .collect())
}
