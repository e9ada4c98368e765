//! Integration tests for the quote extractor
//!
//! These tests use wiremock to stand in for the quotes listing site and
//! exercise the full pull cycle: fragment parsing, tag truncation, page
//! transitions, and failure propagation.

use quillstream::config::ScraperConfig;
use quillstream::{QuillError, QuoteExtractor, SourceType};
use std::io::Write;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Scraper settings used by the tests: default tag cap, no pacing delay
fn test_config() -> ScraperConfig {
    ScraperConfig {
        max_tags_per_quote: 10,
        page_delay_ms: 0,
    }
}

/// The listing endpoint on the mock server
fn endpoint(server: &MockServer) -> Url {
    Url::parse(&format!("{}/quotes", server.uri())).expect("mock server URI is a valid URL")
}

/// Builds one quote fragment in the listing markup shape
fn quote_block(body: &str, author: &str, title: Option<&str>, tags: &[&str]) -> String {
    let title_span = title
        .map(|t| format!(r#"<span class="authorOrTitle"><a href="/work">{t}</a></span>"#))
        .unwrap_or_default();
    let anchors: String = tags
        .iter()
        .map(|tag| format!(r#"<a href="/quotes/tag/{tag}">{tag}</a>, "#))
        .collect();

    format!(
        r#"<div class="quoteText">
            &ldquo;{body}&rdquo; &#8213;
            <span class="authorOrTitle">{author}</span>
            {title_span}
            <div class="greyText smallText left">tags: {anchors}</div>
        </div>"#
    )
}

/// Wraps quote fragments in a full listing page
fn listing_page(blocks: &[String]) -> String {
    format!(
        "<html><head><title>Quotes</title></head><body>{}</body></html>",
        blocks.join("\n")
    )
}

/// Mounts a listing page for the given page index
async fn mount_page(server: &MockServer, page: u32, blocks: &[String], expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("page", page.to_string().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(blocks))
                .insert_header("content-type", "text/html"),
        )
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_pull_parses_record_fields() {
    let server = MockServer::start().await;
    let blocks = vec![
        quote_block("Be yourself.", "Anonymous", None, &["life", "wisdom"]),
        quote_block(
            "So it goes.",
            "Kurt Vonnegut,",
            Some("Slaughterhouse-Five"),
            &["war"],
        ),
    ];
    mount_page(&server, 0, &blocks, 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    let first = extractor.pull_one().await.unwrap();
    assert_eq!(first.content, "Be yourself.");
    assert_eq!(first.author, "Anonymous");
    assert_eq!(first.source.title, "");
    assert_eq!(first.source.source_type, SourceType::None);
    assert_eq!(first.tags, vec!["life", "wisdom"]);

    let second = extractor.pull_one().await.unwrap();
    assert_eq!(second.content, "So it goes.");
    assert_eq!(second.author, "Kurt Vonnegut");
    assert_eq!(second.source.title, "Slaughterhouse-Five");
    assert_eq!(second.source.source_type, SourceType::Book);
    assert_eq!(second.tags, vec!["war"]);
}

#[tokio::test]
async fn test_tags_truncated_to_configured_cap() {
    let server = MockServer::start().await;
    let tags = [
        "life", "wisdom", "extra1", "extra2", "extra3", "extra4", "extra5", "extra6", "extra7",
        "extra8", "extra9", "extra10", "extra11", "extra12",
    ];
    let blocks = vec![quote_block("Be yourself.", "Anonymous", None, &tags)];
    mount_page(&server, 0, &blocks, 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    let record = extractor.pull_one().await.unwrap();
    assert_eq!(record.tags.len(), 10);
    assert_eq!(record.tags[..2], ["life", "wisdom"]);
    assert_eq!(record.tags[9], "extra8");
}

#[tokio::test]
async fn test_exact_page_count_does_not_refetch() {
    let server = MockServer::start().await;
    let blocks = vec![
        quote_block("One.", "A", None, &[]),
        quote_block("Two.", "B", None, &[]),
        quote_block("Three.", "C", None, &[]),
    ];
    mount_page(&server, 0, &blocks, 1).await;
    // Page 1 must never be requested
    mount_page(&server, 1, &blocks, 0).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    for _ in 0..3 {
        extractor.pull_one().await.unwrap();
    }

    assert_eq!(extractor.page_index(), 0);
    // Expectations (one fetch of page 0, none of page 1) verify on drop
}

#[tokio::test]
async fn test_fourth_pull_crosses_to_second_page() {
    let server = MockServer::start().await;
    let page0 = vec![
        quote_block("One.", "A", None, &[]),
        quote_block("Two.", "B", None, &[]),
        quote_block("Three.", "C", None, &[]),
    ];
    let page1 = vec![quote_block("Four.", "D", None, &["next"])];
    mount_page(&server, 0, &page0, 1).await;
    mount_page(&server, 1, &page1, 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    let mut contents = Vec::new();
    for _ in 0..4 {
        contents.push(extractor.pull_one().await.unwrap().content);
    }

    assert_eq!(contents, vec!["One.", "Two.", "Three.", "Four."]);
    assert_eq!(extractor.page_index(), 1);
}

#[tokio::test]
async fn test_initialisation_fails_on_page_without_fragments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quotes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>"),
        )
        .mount(&server)
        .await;

    let result = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server)).await;

    assert!(matches!(
        result,
        Err(QuillError::Initialization { page: 0 })
    ));
}

#[tokio::test]
async fn test_http_status_failure_propagates_mid_stream() {
    let server = MockServer::start().await;
    let page0 = vec![quote_block("Only.", "A", None, &[])];
    mount_page(&server, 0, &page0, 1).await;
    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    extractor.pull_one().await.unwrap();

    let result = extractor.pull_one().await;
    assert!(matches!(
        result,
        Err(QuillError::HttpStatus {
            page: 1,
            status: 500
        })
    ));
}

#[tokio::test]
async fn test_empty_page_mid_stream_is_fatal() {
    let server = MockServer::start().await;
    let page0 = vec![quote_block("Only.", "A", None, &[])];
    mount_page(&server, 0, &page0, 1).await;
    // Page 1 exists but carries no quote fragments
    mount_page(&server, 1, &[], 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    extractor.pull_one().await.unwrap();

    let result = extractor.pull_one().await;
    assert!(matches!(result, Err(QuillError::EmptyPage { page: 1 })));
}

#[tokio::test]
async fn test_malformed_fragment_fails_extraction() {
    let server = MockServer::start().await;
    // Fragment present but without any curly-quote span
    let blocks = vec![r#"<div class="quoteText">no glyphs <span>A</span>
           <div class="greyText smallText left"></div></div>"#
        .to_string()];
    mount_page(&server, 0, &blocks, 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    let result = extractor.pull_one().await;
    assert!(matches!(result, Err(QuillError::Extraction(_))));
}

#[tokio::test]
async fn test_emit_writes_json_lines_to_file() {
    let server = MockServer::start().await;
    let blocks = vec![
        quote_block("One.", "A", None, &["t1"]),
        quote_block("Two.", "B", None, &[]),
    ];
    mount_page(&server, 0, &blocks, 1).await;

    let mut extractor = QuoteExtractor::with_endpoint(&test_config(), endpoint(&server))
        .await
        .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    {
        let mut sink = std::io::BufWriter::new(file.reopen().unwrap());
        extractor.emit_one(&mut sink).await.unwrap();
        extractor.emit_one(&mut sink).await.unwrap();
        sink.flush().unwrap();
    }

    let text = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["content"], "One.");
    assert_eq!(first["author"], "A");
    assert_eq!(first["source"]["type"], "");
    assert_eq!(first["tags"], serde_json::json!(["t1"]));

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["content"], "Two.");
}
