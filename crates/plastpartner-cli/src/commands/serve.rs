//! Serve command - run the HTTP API.

use std::path::PathBuf;

use colored::Colorize;
use plastpartner::{MemoryStore, ReportConfig};
use tracing::{error, info};

use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    store_path: Option<PathBuf>,
    base_year: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::default().with_base_year(base_year);
    let store = match &store_path {
        Some(path) => MemoryStore::open(path)?,
        None => MemoryStore::new(),
    };

    println!("{}", "Plastpartner API".cyan().bold());
    match &store_path {
        Some(path) => println!("  Store:     {}", path.display()),
        None => println!("  Store:     {}", "in memory (not saved)".yellow()),
    }
    println!("  Base year: {}", base_year);
    println!();

    let state = AppState::new(store, config, store_path);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let state_clone = state.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
            if let Err(e) = state_clone.save().await {
                error!("failed to save store: {}", e);
            }
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })
}
