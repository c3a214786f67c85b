use crate::utils::error::Result;
use crate::value::{as_number_like, extend_values, first_number_like, is_object, kind_of};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-fn-utils")]
#[command(about = "Classify, search and merge JSON values")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shallow-merge two JSON objects; keys from OVERRIDES win.
    Merge {
        /// JSON file path or inline JSON
        defaults: String,
        /// JSON file path or inline JSON
        overrides: String,
    },
    /// Print the kind and numeric value of each argument.
    Classify {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print the first numeric-like argument, or null.
    FirstNumber {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

/// Reads a command-line value as JSON, falling back to a plain string.
pub fn parse_value_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Loads JSON from a file when `raw` names one, otherwise parses it inline.
pub fn load_json_arg(raw: &str) -> Result<Value> {
    let path = Path::new(raw);
    if path.is_file() {
        tracing::debug!("Reading JSON from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }
    Ok(serde_json::from_str(raw)?)
}

/// Executes `command`, writing its result to `out`.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Merge {
            defaults,
            overrides,
        } => {
            let defaults = load_json_arg(defaults)?;
            let overrides = load_json_arg(overrides)?;
            for (side, value) in [("defaults", &defaults), ("overrides", &overrides)] {
                if !is_object(value) {
                    tracing::warn!(
                        "{} is a {}, not an object; it adds no keys",
                        side,
                        kind_of(value)
                    );
                }
            }
            let merged = extend_values(&defaults, &overrides);
            writeln!(out, "{}", serde_json::to_string_pretty(&merged)?)?;
        }
        Command::Classify { values } => {
            for raw in values {
                let value = parse_value_arg(raw);
                let number = as_number_like(&value);
                let report = json!({
                    "input": raw,
                    "kind": kind_of(&value),
                    "number_like": number.is_some(),
                    "number": number,
                });
                writeln!(out, "{}", report)?;
            }
        }
        Command::FirstNumber { values } => {
            let parsed: Vec<Value> = values.iter().map(|raw| parse_value_arg(raw)).collect();
            let first = first_number_like(&parsed).cloned().unwrap_or(Value::Null);
            tracing::debug!("Scanned {} values", parsed.len());
            writeln!(out, "{}", first)?;
        }
    }
    Ok(())
}
