//! Per-fragment HTML parsing
//!
//! Turns one quote fragment into its record fields. The parse is immutable:
//! the inline labels (spans) are collected once in document order and
//! consumed by position, so no field can be read twice even when the
//! fragment nests elements. This replaces the destructive extract-and-remove
//! reads the listing markup otherwise invites.

use crate::record::{QuoteSource, SourceType};
use crate::ExtractionError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// CSS selector for the inline labels trailing the quote body
const LABEL_SELECTOR: &str = "span";

/// CSS selector for the tag container inside a fragment
const TAG_CONTAINER_SELECTOR: &str = "div.greyText.smallText.left";

/// The fields parsed out of one fragment, tags not yet truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFragment {
    /// Quote body between the curly-quote glyphs, line breaks preserved
    pub content: String,

    /// Plain author name
    pub author: String,

    /// Source attribution, populated only for comma-separated book credits
    pub source: QuoteSource,

    /// All tag labels in document order
    pub tags: Vec<String>,
}

/// Matches the first curly-quote span, across line breaks
fn quote_body_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(?s)\u{201c}(.*?)\u{201d}").expect("quote body regex is valid"))
}

/// Parses one quote fragment into its record fields
///
/// # Field extraction
///
/// 1. The first inline label is the author text. A comma splits it into
///    the author proper (everything before the first comma) and promotes
///    the second label to the source title with type `Book`.
/// 2. Tags are the anchor texts of the fragment's tag container, in
///    document order.
/// 3. The content is the substring of the fragment's text between the
///    first opening curly quote and its closing glyph.
///
/// # Errors
///
/// * `ExtractionError::MissingAuthor` - no inline label in the fragment
/// * `ExtractionError::MissingTagContainer` - no tag container in the fragment
/// * `ExtractionError::MissingQuoteSpan` - no curly-quote span in the text
pub fn parse_fragment(fragment_html: &str) -> Result<ParsedFragment, ExtractionError> {
    let fragment = Html::parse_fragment(fragment_html);

    let (author, source) = extract_attribution(&fragment)?;
    let tags = extract_tags(&fragment)?;
    let content = extract_content(&fragment)?;

    Ok(ParsedFragment {
        content,
        author,
        source,
        tags,
    })
}

/// Extracts the author and optional book attribution from the inline labels
fn extract_attribution(fragment: &Html) -> Result<(String, QuoteSource), ExtractionError> {
    let selector = Selector::parse(LABEL_SELECTOR).expect("label selector is valid CSS");
    let mut labels = fragment.select(&selector).map(collapsed_text);

    let author_text = labels.next().ok_or(ExtractionError::MissingAuthor)?;

    // A comma marks a book attribution: author before the comma, the next
    // label carries the title.
    if let Some((author, _)) = author_text.split_once(',') {
        let title = labels.next().unwrap_or_default();
        Ok((
            author.trim().to_string(),
            QuoteSource {
                title,
                source_type: SourceType::Book,
            },
        ))
    } else {
        Ok((author_text, QuoteSource::default()))
    }
}

/// Extracts the tag labels from the fragment's tag container, in order
fn extract_tags(fragment: &Html) -> Result<Vec<String>, ExtractionError> {
    let container_selector =
        Selector::parse(TAG_CONTAINER_SELECTOR).expect("tag container selector is valid CSS");
    let anchor_selector = Selector::parse("a").expect("anchor selector is valid CSS");

    let container = fragment
        .select(&container_selector)
        .next()
        .ok_or(ExtractionError::MissingTagContainer)?;

    Ok(container
        .select(&anchor_selector)
        .map(collapsed_text)
        .collect())
}

/// Extracts the quote body from the fragment's full text
///
/// The fragment text is assembled line-per-text-node, then the span between
/// the first opening curly quote and its closing glyph is isolated. Interior
/// line breaks survive.
fn extract_content(fragment: &Html) -> Result<String, ExtractionError> {
    let text = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    quote_body_regex()
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .ok_or(ExtractionError::MissingQuoteSpan)
}

/// Joins an element's text nodes, stripped, with no separator
fn collapsed_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("")
}
