//! Batch download orchestration for fetch-recipes
//!
//! Drives per-recipe download and extraction with a bounded fan-out.
//! Every item reaches a terminal state independently; batch-completion work
//! (compressed-directory cleanup, summary) runs exactly once, after the
//! completion stream has been drained to the end.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::{StreamExt, TryStreamExt};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use tokio::io::AsyncWriteExt;

use crate::core::catalog::Recipe;
use crate::core::config::{ApiConfig, OutputLayout};
use crate::core::error::{Error, Result};
use crate::core::extract;

/// Global HTTP client shared by catalog and archive requests
static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .tcp_keepalive(Duration::from_secs(60))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(20)
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("fetch-recipes/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

pub(crate) fn http_client() -> &'static Client {
    &GLOBAL_CLIENT
}

/// Default bound for the download fan-out
pub fn default_concurrency() -> usize {
    std::cmp::min(8, num_cpus::get() * 2).max(1)
}

/// Terminal state of one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Archive downloaded; `extracted` is false when extraction was disabled
    Done { extracted: bool },

    /// Download failed; extraction was not attempted
    DownloadFailed,

    /// Archive downloaded but could not be unpacked
    ExtractFailed,
}

/// Completion event emitted once per recipe
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub id: String,
    pub status: ItemStatus,
}

/// Observer fed one event per recipe completion, in completion order
pub type ProgressObserver = Arc<dyn Fn(&ItemReport) + Send + Sync>;

/// Options for one batch run
pub struct BatchOptions {
    /// Extract archives into the uncompressed directory (default: true)
    pub uncompress: bool,

    /// Delete the whole compressed directory after the batch (default: false)
    pub delete_compressed: bool,

    /// Maximum number of recipes processed in parallel
    pub concurrency: usize,

    /// Optional completion observer
    pub progress: Option<ProgressObserver>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            uncompress: true,
            delete_compressed: false,
            concurrency: default_concurrency(),
            progress: None,
        }
    }
}

/// Outcome counts for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of recipes in the catalog
    pub total: usize,

    /// Recipes whose archive was downloaded (extraction may still have failed)
    pub downloaded: usize,

    /// Recipes whose download failed
    pub download_failures: usize,

    /// Recipes whose archive downloaded but failed to unpack
    pub extract_failures: usize,
}

/// Downloads every catalog entry and stages it on disk
pub struct BatchDownloader {
    config: ApiConfig,
    layout: OutputLayout,
}

impl BatchDownloader {
    pub fn new(config: ApiConfig, layout: OutputLayout) -> Self {
        Self { config, layout }
    }

    /// Run the batch over `recipes` and return the outcome counts
    ///
    /// Failures are isolated per recipe and never abort the batch. The
    /// completion stream is drained to the end before any cleanup runs, so
    /// the compressed directory is only removed once every item has reached
    /// a terminal state.
    pub async fn run(&self, recipes: &[Recipe], options: &BatchOptions) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            total: recipes.len(),
            ..Default::default()
        };
        let concurrency = options.concurrency.max(1);

        let mut completions = futures::stream::iter(recipes.iter().map(|recipe| {
            let id = recipe.id.clone();
            let url = self.config.download_url(&recipe.id);
            let compressed = self.layout.compressed_path(&recipe.id);
            let uncompressed = self.layout.uncompressed_path(&recipe.id);
            let uncompress = options.uncompress;

            async move {
                let status =
                    process_recipe(&id, &url, &compressed, &uncompressed, uncompress).await;
                ItemReport { id, status }
            }
        }))
        .buffer_unordered(concurrency);

        while let Some(report) = completions.next().await {
            match report.status {
                ItemStatus::Done { .. } => summary.downloaded += 1,
                ItemStatus::DownloadFailed => summary.download_failures += 1,
                ItemStatus::ExtractFailed => {
                    summary.downloaded += 1;
                    summary.extract_failures += 1;
                }
            }
            if let Some(observer) = &options.progress {
                observer(&report);
            }
        }
        drop(completions);

        // Every recipe has reached a terminal state past this point.
        if options.delete_compressed {
            log::info!("Removing compressed files");
            tokio::fs::remove_dir_all(self.layout.compressed_dir()).await?;
        }

        Ok(summary)
    }
}

/// Drive one recipe to its terminal state
async fn process_recipe(
    id: &str,
    url: &str,
    compressed: &Path,
    uncompressed: &Path,
    uncompress: bool,
) -> ItemStatus {
    if let Err(e) = download_to_file(url, compressed).await {
        log::warn!("Could not download {id}: {e}");
        return ItemStatus::DownloadFailed;
    }

    if !uncompress {
        return ItemStatus::Done { extracted: false };
    }

    match extract::extract_tar_gz(compressed, uncompressed).await {
        Ok(()) => ItemStatus::Done { extracted: true },
        Err(e) => {
            log::warn!("Error while decompressing recipe {id}: {e}");
            ItemStatus::ExtractFailed
        }
    }
}

/// Stream one archive to disk, overwriting any previous download
async fn download_to_file(url: &str, path: &Path) -> Result<()> {
    let response = http_client().get(url).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        return Err(Error::HttpError(format!("download returned {status}")));
    }

    let mut reader = tokio_util::io::StreamReader::new(
        response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e)),
    );
    let mut file = tokio::fs::File::create(path).await?;
    tokio::io::copy(&mut reader, &mut file).await?;
    file.flush().await?;

    Ok(())
}
