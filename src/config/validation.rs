use crate::config::types::{Config, OutputConfig, ScraperConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    // page_delay_ms may be 0: tests run with pacing disabled

    if config.max_tags_per_quote < 1 {
        return Err(ConfigError::Validation(format!(
            "max_tags_per_quote must be >= 1, got {}",
            config.max_tags_per_quote
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path must not be empty".to_string(),
        ));
    }

    Ok(())
}
