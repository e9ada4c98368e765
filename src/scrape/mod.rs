//! Scrape module for paginated quote extraction
//!
//! This module contains the core extraction logic, including:
//! - HTTP fetching of listing pages
//! - Per-fragment HTML parsing
//! - Cursor state over pages and fragments
//! - Fixed-interval pacing at page boundaries
//! - The pull-based extractor tying it together

mod cursor;
mod extractor;
mod fetcher;
mod pacing;
mod parser;

pub use cursor::ExtractionCursor;
pub use extractor::{QuoteExtractor, QUOTES_ENDPOINT};
pub use fetcher::{build_http_client, fetch_page, SPOOFED_USER_AGENT};
pub use pacing::{Pacer, DEFAULT_PAGE_DELAY};
pub use parser::{parse_fragment, ParsedFragment};
