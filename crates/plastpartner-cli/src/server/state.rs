//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use plastpartner::{MemoryStore, PlastError, ReportConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Sales and measures for every company.
    pub store: Arc<MemoryStore>,
    /// Schema and base year, fixed for the lifetime of the server.
    pub config: Arc<ReportConfig>,
    /// Where the store is saved after each change; `None` keeps it in memory.
    pub store_path: Option<PathBuf>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: MemoryStore, config: ReportConfig, store_path: Option<PathBuf>) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            store_path,
        }
    }

    /// Save the store to disk, if it has a path.
    pub async fn save(&self) -> Result<(), PlastError> {
        match &self.store_path {
            Some(path) => self.store.save(path).await,
            None => Ok(()),
        }
    }
}
