//! # fetch-recipes
//!
//! Library for mirroring recipe archives from a Ferdi-compatible API.
//!
//! One call to [`fetch_catalog`] retrieves the list of recipes; a
//! [`BatchDownloader`] then downloads every archive into
//! `{output}/compressed/{id}.tar.gz` and, unless disabled, unpacks it into
//! `{output}/uncompressed/{id}/`. Per-recipe failures are isolated and
//! surfaced in the returned [`BatchSummary`].
//!
//! ```no_run
//! use fetch_recipes::{ApiConfig, BatchDownloader, BatchOptions, OutputLayout};
//!
//! # async fn example() -> fetch_recipes::Result<()> {
//! let config = ApiConfig::new("https://api.ferdium.org");
//! let layout = OutputLayout::new("recipes");
//! layout.prepare(true).await?;
//!
//! let catalog = fetch_recipes::fetch_catalog(&config).await?;
//! let summary = BatchDownloader::new(config, layout)
//!     .run(&catalog, &BatchOptions::default())
//!     .await?;
//! println!("downloaded {} of {}", summary.downloaded, summary.total);
//! # Ok(())
//! # }
//! ```

pub mod core;

pub use self::core::catalog::Recipe;
pub use self::core::config::{ApiConfig, OutputLayout, DEFAULT_DOWNLOAD_URL, DEFAULT_RECIPES_URL};
pub use self::core::downloader::{
    default_concurrency, BatchDownloader, BatchOptions, BatchSummary, ItemReport, ItemStatus,
    ProgressObserver,
};
pub use self::core::error::{Error, Result};

/// Fetch the recipe catalog for the configured API
///
/// Thin wrapper over [`core::catalog::fetch_catalog`] using the shared HTTP
/// client and the resolved list URL.
pub async fn fetch_catalog(config: &ApiConfig) -> Result<Vec<Recipe>> {
    crate::core::catalog::fetch_catalog(
        crate::core::downloader::http_client(),
        &config.recipes_list_url(),
    )
    .await
}
