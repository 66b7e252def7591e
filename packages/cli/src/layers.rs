//! Loading JSON layer files into one bag.
//!
//! Layers are applied in the order given: each file is merged over the ones
//! before it, so the last file wins on leaves.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use databag::{Bag, DataBag};

use crate::error::CliError;

/// Read a single JSON file as a bag.
pub fn load_layer(path: &Path) -> Result<DataBag, CliError> {
    log::debug!("Reading layer {}...", path.display());

    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    databag_serde::bag_from_reader(BufReader::new(file)).map_err(|source| CliError::Layer {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge every layer, in order, into an empty bag using `separator`.
pub fn load_layers(paths: &[PathBuf], separator: &str) -> Result<DataBag, CliError> {
    let mut bag = DataBag::with_separator(separator)?;
    for path in paths {
        let layer = load_layer(path)?;
        bag.merge(&layer);
    }
    log::debug!(
        "Merged {} layer(s) into {} top-level key(s)",
        paths.len(),
        bag.len()
    );
    Ok(bag)
}
