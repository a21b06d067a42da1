//! Command-line interface for craft-advisor.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **merge**: Combine two concepts into a project idea
//! - **optimize**: Find cheaper alternatives for a parts list
//! - **suggest**: Suggest projects for the equipment you own
//! - **chat**: Ask the assistant a question
//! - **catalog**: List or export the rule catalog
//! - **serve**: Start the JSON HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Merge two concepts
//! craft-advisor merge flying robot
//!
//! # Cheaper parts, as JSON for scripting
//! craft-advisor --format json optimize "Arduino Uno" "Raspberry Pi 4" "DHT22 sensor"
//!
//! # What can I build with this?
//! craft-advisor suggest -e arduino -e camera --skill-level intermediate --budget 60
//!
//! # Use a customized rule catalog
//! craft-advisor --catalog my_rules.json merge smart garden
//!
//! # Start the API server
//! craft-advisor serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod chat;
pub mod merge;
pub mod optimize;
pub mod suggest;

#[derive(Parser)]
#[command(name = "craft-advisor")]
#[command(version)]
#[command(about = "Rule-based project ideas, cheaper parts and equipment matching for makers")]
#[command(
    long_about = "craft-advisor recommends DIY electronics projects from a curated rule catalog.\n\nIt can:\n- Merge two concepts into a scored project idea\n- Suggest cheaper compatible components and total savings\n- Suggest projects for the equipment you own, within your skill level and budget"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a custom rule catalog (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge two concepts into a project idea
    Merge(merge::MergeArgs),

    /// Find cheaper alternatives for components
    Optimize(optimize::OptimizeArgs),

    /// Suggest projects for the equipment you have
    Suggest(suggest::SuggestArgs),

    /// Ask the assistant a question
    Chat(chat::ChatArgs),

    /// Inspect the rule catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
