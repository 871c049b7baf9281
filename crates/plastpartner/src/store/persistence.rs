//! Persistence for the in-memory store - save/load JSON snapshots.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use crate::error::{PlastError, Result};

use super::memory::{MemoryStore, Snapshot};

impl MemoryStore {
    /// Load a store from a JSON snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            PlastError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader).map_err(|e| {
            PlastError::Persistence(format!(
                "Failed to parse store snapshot '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            path = %path.display(),
            sales = snapshot.sales.len(),
            measures = snapshot.measures.len(),
            "loaded store snapshot"
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Load the snapshot at `path`, or start empty when there is none yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Write the whole store to a JSON snapshot.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PlastError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let snapshot = self.state.read().await.clone();

        let file = File::create(path).map_err(|e| {
            PlastError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &snapshot).map_err(|e| {
            PlastError::Persistence(format!("Failed to serialize store snapshot: {}", e))
        })?;

        Ok(())
    }
}
