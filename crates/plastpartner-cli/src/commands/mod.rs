//! CLI command implementations.

pub mod export;
pub mod import;
pub mod report;
pub mod serve;
pub mod template;
pub mod validate;

use std::path::Path;

use plastpartner::{MemoryStore, PlastError};

/// Open a snapshot that must already exist.
fn open_existing(path: &Path) -> Result<MemoryStore, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "Store not found: {}\nRun 'plastpartner import <FILE> --store {}' first.",
            path.display(),
            path.display()
        )
        .into());
    }
    Ok(MemoryStore::load(path)?)
}

/// Write `content` to `output`, or to stdout when no path is given.
fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            PlastError::Io {
                path: path.to_path_buf(),
                source: e,
            }
            .into()
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
