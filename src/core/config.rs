//! Endpoint and output-directory configuration for fetch-recipes
//!
//! Handles URL template resolution and the on-disk staging layout.

use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Default template for the recipe list endpoint
pub const DEFAULT_RECIPES_URL: &str = "{url}/v1/recipes/";

/// Default template for the per-recipe download endpoint
pub const DEFAULT_DOWNLOAD_URL: &str = "{url}/v1/recipes/download/{id}";

/// Resolved API endpoints for one run
///
/// Templates substitute `{url}` with the API base URL and `{id}` with a
/// recipe id. Substitution is literal, no escaping or validation.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API
    pub api_url: String,

    /// Template for the recipe list endpoint
    pub recipes_url_template: String,

    /// Template for the per-recipe download endpoint
    pub download_url_template: String,
}

impl ApiConfig {
    /// Create a configuration with the default endpoint templates
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            recipes_url_template: DEFAULT_RECIPES_URL.to_string(),
            download_url_template: DEFAULT_DOWNLOAD_URL.to_string(),
        }
    }

    /// Resolve the recipe list URL
    pub fn recipes_list_url(&self) -> String {
        self.recipes_url_template.replace("{url}", &self.api_url)
    }

    /// Resolve the download URL for a single recipe
    pub fn download_url(&self, id: &str) -> String {
        self.download_url_template
            .replace("{url}", &self.api_url)
            .replace("{id}", id)
    }
}

/// Staging layout under the output root
///
/// Archives land in `compressed/{id}.tar.gz`, their extracted contents in
/// `uncompressed/{id}/`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn compressed_dir(&self) -> PathBuf {
        self.root.join("compressed")
    }

    pub fn uncompressed_dir(&self) -> PathBuf {
        self.root.join("uncompressed")
    }

    pub fn compressed_path(&self, id: &str) -> PathBuf {
        self.compressed_dir().join(format!("{id}.tar.gz"))
    }

    pub fn uncompressed_path(&self, id: &str) -> PathBuf {
        self.uncompressed_dir().join(id)
    }

    /// Create the output directories if they don't exist yet
    ///
    /// The uncompressed directory is only created when extraction is enabled.
    pub async fn prepare(&self, uncompress: bool) -> Result<()> {
        if !self.root.exists() {
            log::info!("Recipes directory doesn't exist - Creating...");
        }
        tokio::fs::create_dir_all(self.compressed_dir()).await?;
        if uncompress {
            tokio::fs::create_dir_all(self.uncompressed_dir()).await?;
        }
        Ok(())
    }
}
