use anyhow::Result;
use clap::{Parser, Subcommand};

use linkcard::cli;
use linkcard::infrastructure::tracing::init_tracing;

#[derive(Parser)]
#[command(name = "linkcard")]
#[command(about = "OGP link-preview server backed by a generated placeholder image gallery")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize any missing gallery images, then exit
    Generate,

    /// Ensure the gallery exists, then serve preview pages
    Serve,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate => cli::generate::execute(),
        Commands::Serve => cli::serve::execute(),
    }
}
