//! Error types for the fetch-recipes library
//!
//! Provides error handling for catalog retrieval, downloads and extraction.

use std::fmt;

/// Main error type for fetch-recipes operations
#[derive(Debug)]
pub enum Error {
    /// Catalog could not be fetched or its body was not a JSON array
    CatalogError(String),

    /// HTTP-specific error (non-success status, malformed response)
    HttpError(String),

    /// Network connectivity issues
    NetworkError(String),

    /// File I/O error
    IoError(std::io::Error),

    /// Archive could not be unpacked
    ExtractError(String),

    /// Invalid configuration or parameters
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CatalogError(msg) => {
                write!(f, "Failed to fetch recipe catalog: {}", msg)
            }
            Error::HttpError(msg) => {
                write!(f, "HTTP error: {}", msg)
            }
            Error::NetworkError(msg) => {
                write!(f, "Network error: {}", msg)
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {}", err)
            }
            Error::ExtractError(msg) => {
                write!(f, "Extraction error: {}", msg)
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::NetworkError(err.to_string())
        } else {
            Error::HttpError(err.to_string())
        }
    }
}

/// Convenience result type for fetch-recipes operations
pub type Result<T> = std::result::Result<T, Error>;
