//! Export command - dump a company's stored sales.

use std::path::PathBuf;

use colored::Colorize;
use plastpartner::{export, SalesStore, Scope, TenantId};

use super::{open_existing, write_output};

pub fn run(
    company: String,
    store_path: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tenant = TenantId::new(company)?;
    let store = open_existing(&store_path)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let records = runtime.block_on(store.records(Scope::Tenant(&tenant)))?;
    let csv = export::sales_csv(&records)?;
    write_output(output.as_deref(), &csv)?;

    if let Some(path) = output {
        eprintln!(
            "{} {} records for {} to {}",
            "Exported".green().bold(),
            records.len(),
            tenant,
            path.display()
        );
    }
    Ok(())
}
