use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

use crate::partition::{average_assign, is_empty, partition};

/// Split a JSON array into groups
#[derive(Debug, Parser)]
#[command(name = "partitioner", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split into N groups of near-equal size
    Average {
        /// Number of groups
        #[arg(short, long, allow_hyphen_values = true)]
        groups: i64,

        #[command(flatten)]
        io: IoArgs,
    },
    /// Split into chunks of at most N elements
    Chunk {
        /// Elements per chunk
        #[arg(short, long, allow_hyphen_values = true)]
        size: i64,

        #[command(flatten)]
        io: IoArgs,
    },
    /// Report whether the input is empty
    Check {
        /// Read input from FILE instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args)]
pub struct IoArgs {
    /// Read input from FILE instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Command {
    /// Input file, if one was given
    pub fn input(&self) -> Option<&PathBuf> {
        match self {
            Command::Average { io, .. } | Command::Chunk { io, .. } => io.input.as_ref(),
            Command::Check { input } => input.as_ref(),
        }
    }
}

/// Parse a JSON document into an optional sequence; `null` is the absent one
pub fn parse_sequence(text: &str) -> Result<Option<Vec<Value>>> {
    let value: Value = serde_json::from_str(text).context("Failed to parse input JSON")?;

    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items)),
        other => bail!("Expected a JSON array or null, got {}", kind_of(&other)),
    }
}

/// Run a command against the raw input text and return what to print
pub fn run(command: &Command, text: &str) -> Result<String> {
    let seq = parse_sequence(text)?;
    let seq = seq.as_deref();

    let (groups, pretty) = match command {
        Command::Average { groups, io } => {
            let split = average_assign(seq, *groups).context("Average split failed")?;
            (split, io.pretty)
        }
        Command::Chunk { size, io } => {
            let split = partition(seq, *size).context("Chunked split failed")?;
            (split, io.pretty)
        }
        Command::Check { .. } => {
            let verdict = if is_empty(seq) { "empty" } else { "non-empty" };
            return Ok(verdict.to_string());
        }
    };

    info!(groups = groups.len(), "Split complete");

    let rendered = if pretty {
        serde_json::to_string_pretty(&groups)
    } else {
        serde_json::to_string(&groups)
    };
    rendered.context("Failed to serialize groups")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
