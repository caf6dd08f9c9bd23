//! Regiondash CLI
//!
//! Prints page documents, filter updates and dataset statistics as JSON,
//! for inspecting exactly what the API would hand a renderer.
//!
//! Run with: cargo run --bin regiondash-cli -- page --path /labor

use anyhow::Context;
use clap::{Parser, Subcommand};
use regiondash::config::{generate_default_config, Config};
use regiondash::dataset::{sample, Municipality};
use regiondash::filter::{filter_update, FilterSelection};
use regiondash::router::render_path;

#[derive(Parser)]
#[command(name = "regiondash-cli", version, about = "Regional dashboard inspection tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a page document for a navigation path
    Page {
        /// Navigation path; unknown paths fall back to the overview page
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Recompute the filtered overview charts
    Filter {
        /// Range start, ISO 8601 date (inclusive)
        #[arg(long)]
        start: String,
        /// Range end, ISO 8601 date (inclusive)
        #[arg(long)]
        end: String,
        /// Municipality selector
        #[arg(long, default_value = "all")]
        municipality: String,
    },
    /// Print dataset rows and per-column statistics
    Stats,
    /// Print a default config.toml to stdout
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();

    let (span_start, span_end) = config.dataset.span();
    let dataset = sample::dataset_for_span(span_start, span_end);
    let region = config.region.to_region_info();

    match cli.command {
        Command::Page { path } => {
            let document = render_path(&path, &dataset, &region);
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Command::Filter {
            start,
            end,
            municipality,
        } => {
            let municipality: Municipality =
                serde_json::from_value(serde_json::Value::String(municipality.clone()))
                    .with_context(|| format!("unknown municipality {municipality:?}"))?;
            let selection = FilterSelection::parse(&start, &end, municipality)
                .context("invalid filter selection")?;
            let update = filter_update(&dataset, &selection)?;
            println!("{}", serde_json::to_string_pretty(&update)?);
        }
        Command::Stats => {
            let stats = dataset.column_stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::InitConfig => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}
