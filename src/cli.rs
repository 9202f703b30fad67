//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use repath::Options;
use repath::config::Config;
use repath::output::OutputMode;

/// repath - Express-style route paths to regexes and back
#[derive(Parser, Debug)]
#[command(
    name = "repath",
    version,
    about = "Express-style route paths to regexes and back",
    long_about = "Compile Express-style route paths such as /user/:id into matching regexes.\n\n\
                  Inspect tokens and keys, test candidate paths, or build\n\
                  concrete paths from parameter values."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.repath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Match letter case exactly
    #[arg(long, global = true)]
    pub sensitive: bool,

    /// Require the trailing slash exactly as written
    #[arg(long, global = true)]
    pub strict: bool,

    /// Allow trailing path segments after the match
    #[arg(long = "no-end", global = true)]
    pub no_end: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the tokens a route is parsed into
    Tokens {
        /// Route source, e.g. /user/:id
        path: String,
    },

    /// Show the regex and keys a route compiles to
    Regex {
        /// Route sources (several compile as alternatives)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Test candidate paths against a route
    Match {
        /// Route source
        pattern: String,

        /// Candidate paths
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Build a path from parameter values
    Build {
        /// Route source
        pattern: String,

        /// Parameter as NAME=VALUE (repeat a name to pass a list)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Parameters as a JSON object
        #[arg(long = "params", value_name = "JSON")]
        json_params: Option<String>,
    },

    /// Show version
    Version,
}

impl Cli {
    /// Resolve compile options: config file first, then flags
    fn options(&self) -> anyhow::Result<Options> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        let mut options = config.options;
        if self.sensitive {
            options.sensitive = true;
        }
        if self.strict {
            options.strict = true;
        }
        if self.no_end {
            options.end = false;
        }
        Ok(options)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = cli.options()?;

    match cli.command {
        Command::Tokens { path } => commands::tokens(&path, output_mode),
        Command::Regex { paths } => commands::regex_cmd(&paths, &options, output_mode),
        Command::Match { pattern, paths } => {
            commands::match_paths(&pattern, &paths, &options, output_mode)
        },
        Command::Build {
            pattern,
            params,
            json_params,
        } => commands::build(&pattern, &params, json_params.as_deref(), &options, output_mode),
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(r#"{{"version": "{}"}}"#, repath::VERSION);
            } else {
                println!("repath {}", repath::VERSION);
            }
            Ok(())
        },
    }
}
