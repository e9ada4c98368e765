//! Quillstream: a paginated quote stream extractor
//!
//! This crate implements a pull-based scraper over a paginated quotes listing
//! site. Each pull returns one structured quote record; page transitions
//! happen transparently when the current page's quote fragments run out.

pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for Quillstream operations
///
/// Every failure is fatal for the run: errors bubble unmodified to the
/// caller and the extractor performs no retry, backoff, or rollback.
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Initialisation failed: page {page} yielded no quote fragments")]
    Initialization { page: u32 },

    #[error("Page {page} yielded no quote fragments")]
    EmptyPage { page: u32 },

    #[error("HTTP error fetching page {page}: {source}")]
    Http { page: u32, source: reqwest::Error },

    #[error("Unexpected status {status} fetching page {page}")]
    HttpStatus { page: u32, status: u16 },

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised when a quote fragment does not have the expected shape
///
/// Any of these signals markup drift on the listing site; no partial record
/// is emitted for the offending fragment.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No curly-quote span found in fragment")]
    MissingQuoteSpan,

    #[error("No author label found in fragment")]
    MissingAuthor,

    #[error("No tag container found in fragment")]
    MissingTagContainer,
}

/// Result type alias for Quillstream operations
pub type Result<T> = std::result::Result<T, QuillError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::{QuoteRecord, QuoteSource, SourceType};
pub use scrape::QuoteExtractor;
