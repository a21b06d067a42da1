use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::RuleCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List every rule in the catalog
    List,

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

pub fn run(args: CatalogArgs, catalog: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog)?;

    match args.command {
        CatalogCommands::List => match format {
            OutputFormat::Text => print_text_catalog(&catalog),
            OutputFormat::Json => println!("{}", catalog.to_json()?),
            OutputFormat::Tsv => print_tsv_catalog(&catalog),
        },
        CatalogCommands::Export { output } => {
            let json = catalog.to_json()?;
            std::fs::write(&output, json)?;
            eprintln!("Exported {} rules to {}", catalog.len(), output.display());
        }
    }

    Ok(())
}

fn print_text_catalog(catalog: &RuleCatalog) {
    println!("Concept combinations ({}):", catalog.concepts.combinations.len());
    for combination in &catalog.concepts.combinations {
        println!(
            "  {:<30} {} + {}",
            combination.idea.title, combination.concepts[0], combination.concepts[1]
        );
    }
    println!("  {:<30} (fallback)", catalog.concepts.fallback.title);

    println!("\nPricing rules ({}):", catalog.pricing.rules.len());
    for rule in &catalog.pricing.rules {
        println!(
            "  {:<30} {:<24} ${:.2} -> ${:.2}",
            rule.matcher.to_string(),
            rule.alternative,
            rule.original_price,
            rule.optimized_price
        );
    }

    println!("\nEquipment projects ({}):", catalog.equipment.candidates.len());
    for candidate in &catalog.equipment.candidates {
        println!(
            "  {:<30} {:<24} ${} {}",
            candidate.matcher.to_string(),
            candidate.project.title,
            candidate.project.estimated_cost,
            candidate.project.difficulty
        );
    }
    println!("\nDefault projects ({}):", catalog.equipment.defaults.len());
    for project in &catalog.equipment.defaults {
        println!(
            "  {:<30} ${} {}",
            project.title, project.estimated_cost, project.difficulty
        );
    }

    println!("\nChat topics ({}):", catalog.chat.rules.len());
    for rule in &catalog.chat.rules {
        println!("  {:<30} {}", rule.topic, rule.keywords.join(", "));
    }
    println!("  {:<30} (fallback)", catalog.chat.fallback.topic);
}

fn print_tsv_catalog(catalog: &RuleCatalog) {
    println!("table\tmatcher\tresult");
    for combination in &catalog.concepts.combinations {
        println!(
            "concepts\t{}+{}\t{}",
            combination.concepts[0], combination.concepts[1], combination.idea.title
        );
    }
    for rule in &catalog.pricing.rules {
        println!("pricing\t{}\t{}", rule.matcher, rule.alternative);
    }
    for candidate in &catalog.equipment.candidates {
        println!("equipment\t{}\t{}", candidate.matcher, candidate.project.title);
    }
    for rule in &catalog.chat.rules {
        println!("chat\t{}\t{}", rule.keywords.join(","), rule.topic);
    }
}
