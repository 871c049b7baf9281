//! Validate command - check a sales sheet without storing it.

use std::path::PathBuf;

use colored::Colorize;
use plastpartner::{Parser, ReportConfig, TableValidator};

pub fn run(
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::default();
    let (table, metadata) = Parser::new().parse_file(&file)?;
    let report = TableValidator::new(&config.schema).validate_table(&table);

    if json_output {
        let output = serde_json::json!({
            "file": file.display().to_string(),
            "metadata": metadata,
            "accepted": report.is_accepted(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} ({} rows, {} columns)",
            "Validating".cyan().bold(),
            file.display().to_string().white(),
            metadata.row_count,
            metadata.column_count
        );
        if verbose {
            println!("  sha256: {}", metadata.hash.dimmed());
        }
        println!();

        if !report.unexpected_columns.is_empty() {
            println!(
                "{} {}",
                "Ignored columns:".yellow(),
                report.unexpected_columns.join(", ")
            );
        }

        if report.is_accepted() {
            println!(
                "{} {} rows ready to import",
                "✓".green().bold(),
                table.row_count()
            );
        } else {
            for line in report.to_lines() {
                println!("  {} {}", "✗".red(), line);
            }
            println!();
            println!(
                "{} {} missing columns, {} rows with errors ({} cell errors)",
                "Rejected:".red().bold(),
                report.missing_columns.len(),
                report.row_errors.len(),
                report.cell_error_count()
            );
        }
    }

    if report.is_accepted() {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}
