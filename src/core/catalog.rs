//! Catalog retrieval for fetch-recipes
//!
//! One request to the recipe list endpoint, parsed as a JSON array. Order is
//! preserved as received; there is no dedup or sorting.

use serde::Deserialize;

use crate::core::error::{Error, Result};

/// One catalog entry
///
/// Only `id` is interpreted; every other field the API returns is carried
/// along untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    /// Identifier used to build download URLs and output paths
    pub id: String,

    /// Opaque passthrough of the remaining catalog fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Fetch and parse the recipe catalog
///
/// Any failure here is fatal for the run: without a catalog there is nothing
/// to download, so the error propagates to the caller.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Vec<Recipe>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::CatalogError(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(Error::CatalogError(format!(
            "list request to {url} returned {status}"
        )));
    }

    response
        .json::<Vec<Recipe>>()
        .await
        .map_err(|e| Error::CatalogError(format!("invalid catalog body: {e}")))
}
