use std::path::Path;

use clap::Args;

use crate::catalog::store::RuleCatalog;
use crate::cli::OutputFormat;
use crate::core::component::CostReport;
use crate::matching::engine::RecommendationEngine;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Components to price (e.g., "Arduino Uno" "DHT22 sensor")
    #[arg(required = true, num_args = 1..)]
    pub components: Vec<String>,
}

pub fn run(
    args: OptimizeArgs,
    catalog: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog)?;
    let engine = RecommendationEngine::new(&catalog);
    let report = engine.optimize(&args.components)?;

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &CostReport) {
    println!("Cost Optimization");
    println!("{}", "=".repeat(60));

    for o in &report.optimizations {
        println!("\n{}", o.original);
        println!("  Alternative: {}", o.alternative);
        println!(
            "  ${:.2} -> ${:.2} (save ${:.2}, {}%)",
            o.original_price, o.optimized_price, o.savings, o.savings_percent
        );
    }

    println!(
        "\nTotal: ${:.2} -> ${:.2}",
        report.total_original_price(),
        report.total_original_price() - report.total_savings
    );
    println!(
        "Total savings: ${:.2} ({:.1}%)",
        report.total_savings, report.total_savings_percent
    );
}

fn print_tsv_report(report: &CostReport) {
    println!("original\talternative\toriginal_price\toptimized_price\tsavings\tsavings_percent");
    for o in &report.optimizations {
        println!(
            "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}",
            o.original,
            o.alternative,
            o.original_price,
            o.optimized_price,
            o.savings,
            o.savings_percent,
        );
    }
}
