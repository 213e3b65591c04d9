//! Mattress CLI - browse the Skyindia range and take the mattress finder quiz.
//!
//! Commands:
//! - `mattress recommend` - Recommend mattresses from four answers
//! - `mattress quiz` - Take the finder quiz interactively
//! - `mattress browse` - Filter a collection
//! - `mattress show` - Show a product and its related products
//! - `mattress compare` - Compare up to three products side by side
//! - `mattress catalog` - Summarize and check the catalog
//! - `mattress contact` - Send an enquiry to the store

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CatalogArgs, CompareArgs, ContactArgs, QuizArgs, RecommendArgs, ShowArgs};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MATTRESS_LOG";

/// Mattress CLI - Find and compare Skyindia mattresses
#[derive(Parser)]
#[command(name = "mattress")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend mattresses from quiz answers
    Recommend(RecommendArgs),

    /// Take the mattress finder quiz
    Quiz(QuizArgs),

    /// Browse a collection with filters
    Browse(BrowseArgs),

    /// Show a product by its slug
    Show(ShowArgs),

    /// Compare products side by side
    Compare(CompareArgs),

    /// Summarize the catalog
    Catalog(CatalogArgs),

    /// Send an enquiry
    Contact(ContactArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args, &ctx),
        Commands::Quiz(args) => commands::quiz::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Compare(args) => commands::compare::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber. `--verbose` wins over `MATTRESS_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
