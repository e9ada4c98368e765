//! HTTP fetcher for quote listing pages
//!
//! This module handles the one network concern of the crate:
//! - Building the HTTP client with the fixed spoofed user agent
//! - GET requests for a single listing page
//! - Selecting the quote fragments out of the page body
//!
//! There is no retry, caching, or timeout: a transport failure or
//! non-success status is fatal for the calling pull, and a hung request
//! blocks until the server gives up.

use crate::{QuillError, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Fixed client identification header sent with every page request
///
/// Best-effort evasion of basic bot filters, not a robustness guarantee.
pub const SPOOFED_USER_AGENT: &str =
    "Mozilla/4.0 (iPad; CPU OS 12_1 like Mac OS X) AppleWebKit/603.1.15 (KHTML, like Gecko) Mobile/15E148";

/// CSS selector matching one quote fragment on a listing page
const QUOTE_FRAGMENT_SELECTOR: &str = "div.quoteText";

/// Builds the HTTP client used for all page fetches
///
/// The client sends the spoofed user agent on every request and has no
/// request timeout, matching the unbounded-latency contract of the
/// extractor. Callers needing bounded latency must wrap the pull in an
/// external timeout.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(SPOOFED_USER_AGENT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page and returns its quote fragments
///
/// Issues a single GET to `{endpoint}?page={page_index}`. No retry on
/// failure: transport errors and non-success statuses propagate as typed
/// fatal errors. The returned fragments are the serialized `div.quoteText`
/// subtrees in document order.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `endpoint` - The listing endpoint (without the page query parameter)
/// * `page_index` - Zero-based page to fetch
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Fragments in document order (may be empty)
/// * `Err(QuillError)` - Transport or status failure
pub async fn fetch_page(client: &Client, endpoint: &Url, page_index: u32) -> Result<Vec<String>> {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("page", &page_index.to_string());

    tracing::info!("Fetching quotes page {}", page_index);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| QuillError::Http {
            page: page_index,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuillError::HttpStatus {
            page: page_index,
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| QuillError::Http {
        page: page_index,
        source,
    })?;

    let fragments = select_fragments(&body);
    tracing::debug!(
        "Page {} yielded {} quote fragments",
        page_index,
        fragments.len()
    );

    Ok(fragments)
}

/// Selects the quote fragments out of a page body, in document order
fn select_fragments(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let selector =
        Selector::parse(QUOTE_FRAGMENT_SELECTOR).expect("quote fragment selector is valid CSS");

    document
        .select(&selector)
        .map(|element| element.html())
        .collect()
}
