use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod matching;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("craft_advisor=debug,info")
    } else {
        EnvFilter::new("craft_advisor=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli.catalog.as_deref();

    match cli.command {
        cli::Commands::Merge(args) => {
            cli::merge::run(args, catalog_path, cli.format)?;
        }
        cli::Commands::Optimize(args) => {
            cli::optimize::run(args, catalog_path, cli.format)?;
        }
        cli::Commands::Suggest(args) => {
            cli::suggest::run(args, catalog_path, cli.format)?;
        }
        cli::Commands::Chat(args) => {
            cli::chat::run(args, catalog_path, cli.format)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, catalog_path, cli.format)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args, catalog_path)?;
        }
    }

    Ok(())
}
