use std::path::Path;

use clap::Args;

use crate::catalog::store::RuleCatalog;
use crate::cli::OutputFormat;
use crate::core::idea::MergeResult;
use crate::matching::engine::RecommendationEngine;

#[derive(Args)]
pub struct MergeArgs {
    /// First concept (e.g., "flying")
    #[arg(required = true)]
    pub concept1: String,

    /// Second concept (e.g., "robot")
    #[arg(required = true)]
    pub concept2: String,
}

pub fn run(args: MergeArgs, catalog: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog)?;
    let engine = RecommendationEngine::new(&catalog);
    let idea = engine.merge(&args.concept1, &args.concept2)?;

    match format {
        OutputFormat::Text => print_text_idea(&args, &idea),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&idea)?),
        OutputFormat::Tsv => print_tsv_idea(&idea),
    }

    Ok(())
}

fn print_text_idea(args: &MergeArgs, idea: &MergeResult) {
    println!("{} + {}", args.concept1.trim(), args.concept2.trim());
    println!("{}", "=".repeat(60));

    println!("\n{}", idea.title);
    println!("  {}", idea.description);

    println!("\nScores:");
    println!("  Synergy:     {}%", idea.synergy_score);
    println!("  Innovation:  {}%", idea.innovation_score);
    println!("  Feasibility: {}%", idea.feasibility_score);

    println!("\nDifficulty: {}", idea.difficulty);
    println!("Estimated cost: ${}", idea.estimated_cost);

    println!("\nKey components:");
    for component in &idea.key_components {
        println!("  - {component}");
    }
}

fn print_tsv_idea(idea: &MergeResult) {
    println!(
        "title\tsynergy_score\tinnovation_score\tfeasibility_score\testimated_cost\tdifficulty\tkey_components"
    );
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        idea.title,
        idea.synergy_score,
        idea.innovation_score,
        idea.feasibility_score,
        idea.estimated_cost,
        idea.difficulty,
        idea.key_components.join(","),
    );
}
