//! Output record types
//!
//! One `QuoteRecord` per quote, serialized as a single JSON object on its
//! own line of the output stream.

use serde::{Deserialize, Serialize};

/// The kind of source a quote was attributed to
///
/// Serializes as `""` when the quote carries no source attribution and as
/// `"Book"` when the author label included a book title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    #[serde(rename = "")]
    None,
    Book,
}

/// Optional source attribution for a quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSource {
    /// Title of the source work, empty when no attribution was found
    pub title: String,

    /// Kind of source
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

/// One extracted quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote body, stripped of the surrounding curly-quote glyphs;
    /// interior line breaks are preserved
    pub content: String,

    /// Plain author name
    pub author: String,

    /// Source attribution, populated only for comma-separated book credits
    pub source: QuoteSource,

    /// Tag labels in page order, truncated to the configured maximum
    pub tags: Vec<String>,
}
