//! Command-line parsing and execution.
//!
//! Commands:
//! - `merge` - Print the merged document
//! - `get <name>` - Print the value at a namespace
//! - `set <name> <json>` - Set a value, then print the document
//! - `leaves` - Print every leaf as `name = json`
//!
//! Every command first merges the `-f/--file` layers in order.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use databag::{Bag, DataBag, Value, DEFAULT_SEPARATOR};
use databag_serde::{bag_to_json, json_to_value, value_to_json, value_to_json_string};

use crate::error::CliError;
use crate::layers::load_layers;

/// databag - Layer JSON documents and query them by dotted namespace
#[derive(Parser, Debug)]
#[command(name = "databag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON layer files, lowest precedence first
    #[arg(short, long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Namespace separator
    #[arg(long, global = true, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged document
    Merge,
    /// Print the value at a namespace
    Get {
        /// Dotted name, e.g. `server.port`
        name: String,
    },
    /// Set a value, then print the merged document
    Set {
        /// Dotted name, e.g. `server.port`
        name: String,
        /// JSON value; anything that does not parse is stored as a string
        value: String,
    },
    /// Print every leaf as `name = json`
    Leaves,
}

/// Run a parsed command line, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut bag = load_layers(&cli.files, &cli.separator)?;

    match &cli.command {
        Command::Merge => print_bag(&bag, cli.compact, out),
        Command::Get { name } => {
            let value = bag
                .get(name)
                .ok_or_else(|| CliError::NotFound(name.clone()))?;
            print_value(value, cli.compact, out)
        }
        Command::Set { name, value } => {
            let previous = bag.set(name, parse_value(value));
            if let Some(previous) = previous {
                log::debug!("Replaced {} at '{}'", previous.kind(), name);
            }
            print_bag(&bag, cli.compact, out)
        }
        Command::Leaves => {
            for (name, value) in bag.leaves() {
                writeln!(out, "{} = {}", name, value_to_json(value.clone()))?;
            }
            Ok(())
        }
    }
}

/// Parse a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => json_to_value(json),
        Err(_) => Value::from(raw),
    }
}

fn print_bag(bag: &DataBag, compact: bool, out: &mut impl Write) -> Result<(), CliError> {
    let rendered = bag_to_json(bag, !compact)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

fn print_value(value: &Value, compact: bool, out: &mut impl Write) -> Result<(), CliError> {
    let rendered = value_to_json_string(value.clone(), !compact)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
