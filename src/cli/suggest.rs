use std::path::Path;

use clap::Args;

use crate::catalog::store::RuleCatalog;
use crate::cli::OutputFormat;
use crate::core::project::SuggestionReport;
use crate::matching::engine::{EngineConfig, RecommendationEngine};
use crate::matching::equipment::{
    SuggestConfig, DEFAULT_BUDGET, DEFAULT_MAX_SUGGESTIONS, DEFAULT_SKILL_LEVEL,
};

#[derive(Args)]
pub struct SuggestArgs {
    /// Equipment you own - can be specified multiple times
    #[arg(short, long = "equipment")]
    pub equipment: Vec<String>,

    /// Your skill level (beginner, intermediate, advanced)
    #[arg(short, long, default_value = DEFAULT_SKILL_LEVEL)]
    pub skill_level: String,

    /// Maximum project cost in dollars
    #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
    pub budget: f64,

    /// Maximum number of suggestions to show
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub limit: usize,
}

pub fn run(args: SuggestArgs, catalog: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog)?;
    let config = EngineConfig {
        suggest: SuggestConfig {
            max_suggestions: args.limit,
        },
    };
    let engine = RecommendationEngine::with_config(&catalog, config);
    let report = engine.suggest(&args.equipment, &args.skill_level, args.budget);

    match format {
        OutputFormat::Text => print_text_report(&args, &report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(args: &SuggestArgs, report: &SuggestionReport) {
    let equipment = if args.equipment.is_empty() {
        "(none)".to_string()
    } else {
        args.equipment.join(", ")
    };
    println!("Equipment: {equipment}");
    println!("Skill level: {}, budget: ${}", args.skill_level, args.budget);
    println!("{}", "=".repeat(60));

    if report.suggestions.is_empty() {
        println!("\nNo projects fit this skill level and budget.");
        return;
    }

    for (i, s) in report.suggestions.iter().enumerate() {
        println!("\n#{} {} ({}% match)", i + 1, s.title, s.match_score);
        println!("  {}", s.description);
        println!("  Difficulty: {}, estimated cost: ${}", s.difficulty, s.estimated_cost);
        if !s.required_additional.is_empty() {
            println!("  You'll also need: {}", s.required_additional.join(", "));
        }
    }

    if report.is_truncated() {
        println!(
            "\nShowing {} of {} matching projects.",
            report.suggestions.len(),
            report.total_matches
        );
    }
}

fn print_tsv_report(report: &SuggestionReport) {
    println!("title\tmatch_score\testimated_cost\tdifficulty\trequired_additional");
    for s in &report.suggestions {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            s.title,
            s.match_score,
            s.estimated_cost,
            s.difficulty,
            s.required_additional.join(","),
        );
    }
}
