//! Plastpartner CLI - validate, store and report partnership sales data.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate { file, json } => commands::validate::run(file, json, cli.verbose),

        Commands::Serve {
            port,
            store,
            base_year,
        } => commands::serve::run(port, store, base_year),

        Commands::Import {
            file,
            company,
            store,
        } => commands::import::run(file, company, store),

        Commands::Report {
            company,
            store,
            base_year,
            json,
        } => commands::report::run(company, store, base_year, json),

        Commands::Export {
            company,
            store,
            output,
        } => commands::export::run(company, store, output),

        Commands::Template { output } => commands::template::run(output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
