//! The page quote extractor
//!
//! `QuoteExtractor` is the one stateful component of the crate: a lazy
//! sequence producer over the paginated quotes listing. Each `pull_one`
//! yields the next quote record; when the active page runs out of fragments
//! the extractor transparently paces, fetches the next page, and continues
//! from its first fragment.

use crate::config::ScraperConfig;
use crate::output;
use crate::record::QuoteRecord;
use crate::scrape::cursor::ExtractionCursor;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::scrape::pacing::Pacer;
use crate::scrape::parser::parse_fragment;
use crate::{QuillError, Result};
use reqwest::Client;
use std::io::Write;
use url::Url;

/// Production listing endpoint; the page number goes in the query string
pub const QUOTES_ENDPOINT: &str = "https://www.goodreads.com/quotes";

/// Stateful pull-based producer of quote records
///
/// Not safe for concurrent pulls: every operation takes `&mut self`, so a
/// single logical caller serializes all pulls. Errors are fatal for the
/// instance; the cursor may be left advanced past a failed fragment.
pub struct QuoteExtractor {
    client: Client,
    endpoint: Url,
    max_tags_per_quote: usize,
    pacer: Pacer,
    cursor: ExtractionCursor,
}

impl QuoteExtractor {
    /// Creates an extractor against the production listing endpoint
    ///
    /// Performs the page-0 fetch eagerly; construction fails when the fetch
    /// fails or the page yields no quote fragments (the site is unreachable
    /// or its markup changed). This is fatal for the instance, no retry.
    pub async fn new(config: &ScraperConfig) -> Result<Self> {
        let endpoint = Url::parse(QUOTES_ENDPOINT)?;
        Self::with_endpoint(config, endpoint).await
    }

    /// Creates an extractor against an explicit listing endpoint
    ///
    /// The production endpoint is a constant, not configuration; this
    /// constructor exists so tests can aim the extractor at a local server.
    pub async fn with_endpoint(config: &ScraperConfig, endpoint: Url) -> Result<Self> {
        let client = build_http_client()?;

        let fragments = fetch_page(&client, &endpoint, 0).await?;
        if fragments.is_empty() {
            return Err(QuillError::Initialization { page: 0 });
        }

        Ok(Self {
            client,
            endpoint,
            max_tags_per_quote: config.max_tags_per_quote,
            pacer: Pacer::from_millis(config.page_delay_ms),
            cursor: ExtractionCursor::new(fragments),
        })
    }

    /// The page the current fragments came from
    pub fn page_index(&self) -> u32 {
        self.cursor.page_index()
    }

    /// Pulls the next quote record
    ///
    /// When the active page is exhausted this first performs the page
    /// transition: advance the page index, pause once, fetch, rewind to the
    /// new page's first fragment. Pulling exactly one page's worth of
    /// records therefore never touches the network a second time.
    ///
    /// # Errors
    ///
    /// Network and status failures from the page fetch, and extraction
    /// failures from a malformed fragment, propagate unmodified. A fetched
    /// page with no quote fragments is fatal too. No partial record is
    /// produced in any of these cases.
    pub async fn pull_one(&mut self) -> Result<QuoteRecord> {
        if self.cursor.exhausted() {
            let page = self.cursor.advance_page();

            self.pacer.pause().await;

            let fragments = fetch_page(&self.client, &self.endpoint, page).await?;
            if fragments.is_empty() {
                return Err(QuillError::EmptyPage { page });
            }
            self.cursor.load_page(fragments);
        }

        let parsed = parse_fragment(self.cursor.current())?;
        self.cursor.advance();

        let mut tags = parsed.tags;
        tags.truncate(self.max_tags_per_quote);

        Ok(QuoteRecord {
            content: parsed.content,
            author: parsed.author,
            source: parsed.source,
            tags,
        })
    }

    /// Pulls one record and writes it as a single JSON line to `sink`
    pub async fn emit_one<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        let record = self.pull_one().await?;
        output::write_record(sink, &record)?;
        Ok(())
    }
}
