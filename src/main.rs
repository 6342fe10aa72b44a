use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use traverse_table::{input, Report};

#[derive(Parser, Debug)]
#[command(
    name = "traverse-table",
    version,
    about = "Reduce a closed survey traverse: angle closure, bearings, Bowditch adjustment, coordinates"
)]
struct Cli {
    /// JSON file with the stations and the observed angles.
    input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Log every reduction step (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain text tables
    Table,
    /// The full reduction as JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let traverse = input::load(&cli.input)
        .with_context(|| format!("Failed to load the traverse from {}", cli.input.display()))?;
    let reduction = traverse.reduce();
    info!("Reduced {} stations", reduction.stations.len());

    match cli.format {
        Format::Table => print!("{}", Report::new(&reduction)),
        Format::Json => {
            let json = serde_json::to_string_pretty(&reduction).context("Failed to serialize the reduction")?;
            println!("{}", json);
        }
    }
    Ok(())
}
