//! Configuration module for Quillstream
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults, so running without a config file works.
//!
//! # Example
//!
//! ```no_run
//! use quillstream::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Tags kept per quote: {}", config.scraper.max_tags_per_quote);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig};

// Re-export parser functions
pub use parser::load_config;
