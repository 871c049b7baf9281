//! Report command - a company's totals and growth against the partnership.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use colored::Colorize;
use plastpartner::{Dashboard, ReductionTarget, ReportConfig, SalesStore, Scope, TenantId};

use super::open_existing;

pub fn run(
    company: String,
    store_path: PathBuf,
    base_year: i32,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tenant = TenantId::new(company)?;
    let config = ReportConfig::default().with_base_year(base_year);
    let store = open_existing(&store_path)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let (mine, all) = runtime.block_on(async {
        let mine = store.records(Scope::Tenant(&tenant)).await?;
        let all = store.records(Scope::All).await?;
        Ok::<_, plastpartner::PlastError>((mine, all))
    })?;

    let dashboard = Dashboard::build(&tenant, &mine, &all, &config, Local::now().year());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("{} {}", "Sales report for".cyan().bold(), tenant.to_string().white());
    println!();
    println!("  Units sold:          {}", dashboard.total_company.to_string().white().bold());
    println!("  Partnership total:   {}", dashboard.total_industry);
    println!();

    match &dashboard.growth {
        Some(growth) => {
            println!(
                "{} (base year {} = 100)",
                "Growth:".yellow().bold(),
                dashboard.base_year
            );
            println!("  {:<6} {:>10} {:>12}", "Year", "Company", "Partnership");
            for point in growth {
                println!(
                    "  {:<6} {:>10} {:>12}",
                    point.year,
                    format_index(point.company),
                    format_index(point.industry)
                );
            }
            println!("  {}", format_target(&dashboard.target).dimmed());
        }
        None => println!(
            "{} no sales recorded for base year {}",
            "Growth unavailable:".yellow(),
            dashboard.base_year
        ),
    }

    if !dashboard.monthly.is_empty() {
        println!();
        println!("{}", "This year by month:".yellow().bold());
        for month in &dashboard.monthly {
            println!("  {:<10} {}", month.name, month.number_sold);
        }
    }

    Ok(())
}

fn format_index(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn format_target(target: &ReductionTarget) -> String {
    format!(
        "Target: index {:.0} by {} ({:+.0}%)",
        target.index,
        target.year,
        target.percent_change()
    )
}
