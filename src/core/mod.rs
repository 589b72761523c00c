//! Core library modules for fetch-recipes
//!
//! This module contains the internal implementation details of the
//! fetch-recipes library.

pub mod catalog;
pub mod config;
pub mod downloader;
pub mod error;
pub mod extract;

// Re-export main types for internal use
pub use config::{ApiConfig, OutputLayout};
pub use downloader::BatchDownloader;
