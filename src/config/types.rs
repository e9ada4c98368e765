use serde::Deserialize;

/// Main configuration structure for Quillstream
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Maximum number of tags kept per quote
    #[serde(rename = "max-tags-per-quote", default = "default_max_tags")]
    pub max_tags_per_quote: usize,

    /// Pause between page fetches (milliseconds); 0 disables pacing
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON-lines output file
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_max_tags() -> usize {
    10
}

fn default_page_delay_ms() -> u64 {
    500
}

fn default_output_path() -> String {
    "quotes.json".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_tags_per_quote: default_max_tags(),
            page_delay_ms: default_page_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
