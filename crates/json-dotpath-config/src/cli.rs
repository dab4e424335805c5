//! `json-config`: read and edit a JSON configuration file by dot-path.
//!
//! Usage:
//!   json-config <file> get <path>
//!   json-config <file> set <path> <json>
//!   json-config <file> remove <path>
//!   json-config <file> merge <json> [--merge-arrays]
//!   json-config <file> copy <from> <to>
//!
//! `get` prints the value found; the editing commands print the document
//! after it has been written back.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::error::Result;
use crate::store::ConfigStore;

#[derive(Parser, Debug)]
#[command(name = "json-config")]
#[command(about = "Read and edit JSON/JSONC configuration files by dot-path")]
#[command(version)]
pub struct Cli {
    /// Configuration file to operate on
    #[arg(env = "JSON_CONFIG_FILE")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value at a path
    Get { path: String },
    /// Write a value at a path; non-JSON input is stored as a string
    Set { path: String, value: String },
    /// Delete the value at a path
    Remove { path: String },
    /// Deep-merge a JSON object into the document
    Merge {
        value: String,
        /// Union arrays instead of replacing them
        #[arg(long)]
        merge_arrays: bool,
    },
    /// Copy the value at one path to another
    Copy { from: String, to: String },
}

/// Parse a command-line value: JSON when it parses, a plain string otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Execute one command and return what should be printed.
pub fn run(cli: Cli) -> Result<String> {
    let mut store = ConfigStore::load(&cli.file)?;
    match cli.command {
        Command::Get { path } => {
            let found: Value = store.get_required(&path, "path '{path}' not found")?;
            Ok(serde_json::to_string_pretty(&found)?)
        }
        Command::Set { path, value } => {
            store.upsert(&path, parse_value(&value))?;
            Ok(serde_json::to_string_pretty(store.document())?)
        }
        Command::Remove { path } => {
            store.remove_at(&path)?;
            Ok(serde_json::to_string_pretty(store.document())?)
        }
        Command::Merge {
            value,
            merge_arrays,
        } => {
            let other: Value = serde_json::from_str(&value)?;
            store.merge(&other, merge_arrays)?;
            Ok(serde_json::to_string_pretty(store.document())?)
        }
        Command::Copy { from, to } => {
            store.clone_path(&from, &to)?;
            Ok(serde_json::to_string_pretty(store.document())?)
        }
    }
}
