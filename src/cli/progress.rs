//! CLI-specific progress handling for fetch-recipes
//!
//! Provides the catalog spinner and the per-recipe progress bar for the
//! command-line interface.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner shown while the catalog is being fetched
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Creates the recipe-count progress bar for the batch phase
pub fn create_recipe_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} recipes ETA: {eta}")
            .expect("Failed to create progress style")
            .progress_chars("#>-")
    );
    pb
}
