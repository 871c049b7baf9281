//! Template command - write the upload sheet header with an example row.

use std::path::PathBuf;

use colored::Colorize;
use plastpartner::ReportConfig;

use super::write_output;

pub fn run(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let template = ReportConfig::default().schema.template_csv();
    write_output(output.as_deref(), &template)?;

    if let Some(path) = output {
        eprintln!("{} {}", "Template written to".green(), path.display());
    }
    Ok(())
}
