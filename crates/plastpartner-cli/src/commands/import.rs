//! Import command - validate a sheet and store its rows for a company.

use std::path::PathBuf;

use colored::Colorize;
use plastpartner::{ingest, IngestionOutcome, MemoryStore, Parser, ReportConfig, TableValidator, TenantId};

pub fn run(
    file: PathBuf,
    company: String,
    store_path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let tenant = TenantId::new(company)?;
    let config = ReportConfig::default();

    let (table, _metadata) = Parser::new().parse_file(&file)?;
    let rows = match TableValidator::new(&config.schema).accept(&table) {
        Ok(rows) => rows,
        Err(report) => {
            for line in report.to_lines() {
                eprintln!("  {} {}", "✗".red(), line);
            }
            return Err(format!("{} was rejected, nothing imported", file.display()).into());
        }
    };

    let store = MemoryStore::open(&store_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let result = ingest(&store, &tenant, rows).await;
        store.save(&store_path).await.map(|_| result)
    })?;

    match result.outcome() {
        IngestionOutcome::Complete => println!(
            "{} {} rows for {}",
            "✓ Imported".green().bold(),
            result.succeeded.len(),
            tenant
        ),
        IngestionOutcome::Partial => {
            println!(
                "{} {} stored, {} failed",
                "Partially imported:".yellow().bold(),
                result.succeeded.len(),
                result.failed.len()
            );
            for failed in &result.failed {
                println!("  {} row {}: {}", "✗".red(), failed.index, failed.error);
            }
        }
    }

    Ok(())
}
