//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use plastpartner::DEFAULT_BASE_YEAR;

/// Plastpartner: sales reporting for the plastic reduction partnership
#[derive(Parser)]
#[command(name = "plastpartner")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a sales sheet against the upload schema
    Validate {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Snapshot file to load on start and save after changes
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,

        /// Year that growth figures are indexed against
        #[arg(long, default_value_t = DEFAULT_BASE_YEAR)]
        base_year: i32,
    },

    /// Validate a sales sheet and store its rows for a company
    Import {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Company the rows belong to
        #[arg(short, long)]
        company: String,

        /// Snapshot file to store into
        #[arg(long, value_name = "FILE")]
        store: PathBuf,
    },

    /// Show a company's totals and growth against the partnership
    Report {
        /// Company to report on
        #[arg(short, long)]
        company: String,

        /// Snapshot file to read
        #[arg(long, value_name = "FILE")]
        store: PathBuf,

        /// Year that growth figures are indexed against
        #[arg(long, default_value_t = DEFAULT_BASE_YEAR)]
        base_year: i32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a company's stored sales as semicolon-separated text
    Export {
        /// Company to export
        #[arg(short, long)]
        company: String,

        /// Snapshot file to read
        #[arg(long, value_name = "FILE")]
        store: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write an empty upload sheet with one example row
    Template {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["plastpartner", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, store, base_year } => {
                assert_eq!(port, 3141);
                assert!(store.is_none());
                assert_eq!(base_year, DEFAULT_BASE_YEAR);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_import_requires_company() {
        assert!(Cli::try_parse_from(["plastpartner", "import", "sales.csv", "--store", "s.json"]).is_err());
    }
}
