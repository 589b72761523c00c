//! CLI-specific modules for fetch-recipes
//!
//! Contains presentation helpers used only by the command-line interface.

pub mod progress;

pub use progress::{create_recipe_bar, create_spinner};
