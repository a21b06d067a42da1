use std::path::Path;

use clap::Args;

use crate::catalog::store::RuleCatalog;
use crate::cli::OutputFormat;
use crate::matching::engine::RecommendationEngine;

#[derive(Args)]
pub struct ChatArgs {
    /// Message for the assistant; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

pub fn run(args: ChatArgs, catalog: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog)?;
    let engine = RecommendationEngine::new(&catalog);
    let reply = engine.respond(&args.message.join(" "))?;

    match format {
        OutputFormat::Text => println!("{}", reply.response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reply)?),
        OutputFormat::Tsv => {
            println!("topic\ttimestamp\tresponse");
            println!("{}\t{}\t{}", reply.topic, reply.timestamp, reply.response);
        }
    }

    Ok(())
}
