//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Key, Token};
use crate::core::services::PathMatch;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of tokenizing a route
#[derive(Debug, Serialize)]
pub struct TokensResult {
    /// The route source
    pub path: String,
    /// Tokens in source order
    pub tokens: Vec<Token>,
}

/// Result of compiling one or more routes
#[derive(Debug, Serialize)]
pub struct RegexResult {
    /// Regex source (without case flag)
    pub regex: String,
    /// Capture group descriptors
    pub keys: Vec<Key>,
}

/// Result of matching one candidate
#[derive(Debug, Serialize)]
pub struct MatchOutcome {
    /// The candidate path
    pub path: String,
    /// The match, if any
    #[serde(rename = "match")]
    pub found: Option<PathMatch>,
}

/// Result of matching candidates against a route
#[derive(Debug, Serialize)]
pub struct MatchResult {
    /// Regex source used
    pub regex: String,
    /// One outcome per candidate
    pub results: Vec<MatchOutcome>,
}

/// Result of building a path
#[derive(Debug, Serialize)]
pub struct BuildResult {
    /// The built path
    pub path: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn describe_key(key: &Key) -> String {
    let mut flags = Vec::new();
    if key.optional {
        flags.push("optional");
    }
    if key.repeat {
        flags.push("repeat");
    }
    let mut line = key.name.clone();
    if let Some(pattern) = &key.pattern {
        line.push_str(&format!(" pattern={pattern}"));
    }
    if let Some(prefix) = key.prefix.as_deref().filter(|p| !p.is_empty()) {
        line.push_str(&format!(" prefix={prefix}"));
    }
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

impl TokensResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tokens.is_empty() {
            println!("No tokens.");
            return;
        }

        for token in &self.tokens {
            match token {
                Token::Literal(text) => println!("  {} {:?}", "literal".dimmed(), text),
                Token::Param(param) => {
                    println!("  {}   {}", "param".cyan(), describe_key(&Key::from(param)));
                },
            }
        }
    }
}

impl RegexResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.regex);
        if self.keys.is_empty() {
            return;
        }
        println!();
        println!("Keys:");
        for (i, key) in self.keys.iter().enumerate() {
            println!("  {}. {}", i + 1, describe_key(key));
        }
    }
}

impl MatchResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for outcome in &self.results {
            let Some(found) = &outcome.found else {
                println!("{} {}", "no match".red(), outcome.path);
                continue;
            };

            println!("{} {} ({})", "match".green(), outcome.path, found.matched);
            for (name, value) in &found.params {
                match value {
                    Some(value) => println!("  {name} = {value}"),
                    None => println!("  {name} = {}", "(none)".dimmed()),
                }
            }
        }
    }

    /// Whether any candidate matched
    #[must_use]
    pub fn any_matched(&self) -> bool {
        self.results.iter().any(|r| r.found.is_some())
    }
}

impl BuildResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.path),
            OutputMode::Json => render_json(self),
        }
    }
}
