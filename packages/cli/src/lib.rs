//! # databag-cli
//!
//! A command-line front end for data bags.
//!
//! JSON files are read as layers and deep-merged in the order given, later
//! files overriding earlier ones on leaves. The merged bag can then be
//! printed, queried, or edited by dotted namespace.
//!
//! ## Usage
//!
//! ```bash
//! # Print the merged document
//! databag merge -f defaults.json -f site.json
//!
//! # Query one value
//! databag get server.port -f defaults.json -f site.json
//!
//! # Override a value on top of the layers
//! databag set server.tls.enabled true -f defaults.json
//!
//! # Flatten to name = value lines
//! databag leaves -f defaults.json --separator /
//! ```
//!
//! Set `RUST_LOG=debug` to see each layer as it is loaded.

pub mod commands;
pub mod error;
pub mod layers;

pub use commands::{run, Cli, Command};
pub use error::CliError;
