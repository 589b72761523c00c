//! # fetch-recipes CLI
//!
//! Command-line interface for the fetch-recipes library.
//! Mirrors every recipe archive published by a Ferdi-compatible API.

use std::sync::Arc;

use clap::Parser;
use fetch_recipes::{
    ApiConfig, BatchDownloader, BatchOptions, ItemReport, ItemStatus, OutputLayout, Result,
};
use log::error;

mod cli;

/// Command-line interface for fetch-recipes
#[derive(Parser)]
#[command(name = "fetch-recipes")]
#[command(about = "Fetch all recipes from a Ferdi-compatible API")]
#[command(long_about = "Downloads every recipe archive listed by the API:
  fetch-recipes https://api.ferdium.org                # Download and extract all recipes
  fetch-recipes https://api.ferdium.org -u             # Keep archives compressed
  fetch-recipes https://api.ferdium.org -c             # Drop archives after extraction
  fetch-recipes https://api.ferdium.org -o ./mirror    # Custom output folder

Archives land in {output}/compressed/{id}.tar.gz and are extracted into
{output}/uncompressed/{id}/ unless --no-uncompress is given.")]
#[command(version)]
struct Cli {
    /// Base URL of the API to fetch from
    url: String,

    /// Don't uncompress the recipe archives
    #[arg(short = 'u', long = "no-uncompress")]
    no_uncompress: bool,

    /// Delete compressed archives after the whole batch finished
    #[arg(short = 'c', long)]
    delete_compressed: bool,

    /// Output folder
    #[arg(short, long, default_value = "recipes")]
    output: String,

    /// Full URL to get the recipes list. {url} is replaced with the API URL.
    #[arg(short, long, default_value = fetch_recipes::DEFAULT_RECIPES_URL)]
    recipes_url: String,

    /// Full URL to download recipes. {url} is replaced with the API URL, {id} with the recipe ID.
    #[arg(short, long, default_value = fetch_recipes::DEFAULT_DOWNLOAD_URL)]
    download_url: String,

    /// Maximum number of recipes downloaded in parallel
    #[arg(short = 'n', long, default_value_t = fetch_recipes::default_concurrency())]
    concurrency: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if cli.verbose {
        eprintln!("fetch-recipes v{} starting...", env!("CARGO_PKG_VERSION"));
    }

    let config = ApiConfig {
        api_url: cli.url.clone(),
        recipes_url_template: cli.recipes_url.clone(),
        download_url_template: cli.download_url.clone(),
    };
    let layout = OutputLayout::new(&cli.output);
    layout.prepare(!cli.no_uncompress).await?;

    // Catalog phase: one request, fatal on failure
    let spinner = cli::create_spinner("Getting list of recipes");
    let catalog = fetch_recipes::fetch_catalog(&config).await;
    spinner.finish_and_clear();
    let catalog = catalog?;

    let total = catalog.len();
    eprintln!("Found {total} recipes");

    // Batch phase: bounded fan-out, progress fed by completion events
    let pb = cli::create_recipe_bar(total as u64);
    let observer_bar = pb.clone();
    let options = BatchOptions {
        uncompress: !cli.no_uncompress,
        delete_compressed: cli.delete_compressed,
        concurrency: cli.concurrency,
        progress: Some(Arc::new(move |report: &ItemReport| {
            match report.status {
                ItemStatus::Done { .. } => {}
                ItemStatus::DownloadFailed => {
                    observer_bar.println(format!("Could not download {}", report.id));
                }
                ItemStatus::ExtractFailed => {
                    observer_bar.println(format!("Could not extract {}", report.id));
                }
            }
            observer_bar.inc(1);
        })),
    };

    let downloader = BatchDownloader::new(config, layout);
    let summary = downloader.run(&catalog, &options).await?;
    pb.finish_and_clear();

    eprintln!(
        "Done. Got {} of {} recipes. Saved into {}",
        summary.downloaded, summary.total, cli.output
    );
    if summary.download_failures > 0 {
        eprintln!("{} recipe(s) failed to download", summary.download_failures);
    }
    if summary.extract_failures > 0 {
        eprintln!("{} recipe(s) failed to extract", summary.extract_failures);
    }

    Ok(())
}
