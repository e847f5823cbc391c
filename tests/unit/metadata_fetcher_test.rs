//! Unit tests for metadata extraction and the fetcher's failure contract.
//!
//! Extraction is pure and tested against canned HTML; the network tests only
//! exercise failure paths (malformed URL, unreachable host) so they pass
//! without internet access.

use linkstash::services::metadata_fetcher::{extract_metadata, FetchMetadata, MetadataFetcher};
use rstest::rstest;

/// Title priority: og:title wins, <title> is the fallback, blanks fall through.
#[rstest]
#[case(
    r#"<head><meta property="og:title" content="OG Title"><title>Doc Title</title></head>"#,
    Some("OG Title")
)]
#[case(r#"<head><title>Doc Title</title></head>"#, Some("Doc Title"))]
#[case(
    r#"<head><meta property="og:title" content="  "><title>Doc Title</title></head>"#,
    Some("Doc Title")
)]
#[case(r#"<head></head>"#, None)]
fn test_title_priority(#[case] html: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_metadata(html).title.as_deref(), expected);
}

/// Description priority: og:description, else meta name="description".
#[rstest]
#[case(
    r#"<meta property="og:description" content="From OG"><meta name="description" content="Generic">"#,
    Some("From OG")
)]
#[case(r#"<meta name="description" content="Generic">"#, Some("Generic"))]
#[case(r#"<meta name="keywords" content="unrelated">"#, None)]
fn test_description_priority(#[case] html: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_metadata(html).description.as_deref(), expected);
}

/// Image priority: og:image, else the icon link's href.
#[rstest]
#[case(
    r#"<meta property="og:image" content="https://x.test/p.png"><link rel="icon" href="/f.ico">"#,
    Some("https://x.test/p.png")
)]
#[case(r#"<link rel="icon" href="/favicon.ico">"#, Some("/favicon.ico"))]
#[case(r#"<link rel="shortcut icon" href="/favicon.ico">"#, Some("/favicon.ico"))]
#[case(r#"<link rel="stylesheet" href="/style.css">"#, None)]
fn test_image_priority(#[case] html: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_metadata(html).image_url.as_deref(), expected);
}

/// Tag and attribute matching is case-insensitive and quote-tolerant.
#[test]
fn test_extraction_tolerates_markup_variants() {
    let html = r#"
        <HEAD>
          <META PROPERTY='og:title' CONTENT='Shouty Page'>
          <LINK REL='ICON' HREF='/loud.ico'>
        </HEAD>
    "#;
    let metadata = extract_metadata(html);
    assert_eq!(metadata.title.as_deref(), Some("Shouty Page"));
    assert_eq!(metadata.image_url.as_deref(), Some("/loud.ico"));
}

/// `<metadata>` must not be mistaken for a `<meta>` tag.
#[test]
fn test_longer_tag_names_are_not_matched() {
    let html = r#"<metadata property="og:title" content="Wrong"></metadata>"#;
    assert!(extract_metadata(html).title.is_none());
}

/// Surrounding whitespace in tag text is trimmed.
#[test]
fn test_title_text_is_trimmed() {
    let html = "<title>\n  Spaced Out  \n</title>";
    assert_eq!(extract_metadata(html).title.as_deref(), Some("Spaced Out"));
}

/// A page with none of the expected tags yields an empty result.
#[test]
fn test_empty_page_yields_empty_metadata() {
    let metadata = extract_metadata("<html><body><p>hello</p></body></html>");
    assert!(metadata.is_empty());
}

/// Non-ASCII content survives extraction (offsets come from an ASCII-folded
/// copy, so multibyte text must not skew them).
#[test]
fn test_non_ascii_content() {
    let html = r#"<p>日本語のテキスト</p><meta property="og:title" content="設計靈感 🎨">"#;
    assert_eq!(extract_metadata(html).title.as_deref(), Some("設計靈感 🎨"));
}

/// A malformed URL collapses to `None`, never an error.
#[tokio::test]
async fn test_fetch_malformed_url_is_none() {
    let fetcher = MetadataFetcher::new();
    assert!(fetcher.fetch("not a url at all").await.is_none());
}

/// An unreachable host collapses to `None`.
#[tokio::test]
async fn test_fetch_unreachable_host_is_none() {
    let fetcher = MetadataFetcher::new();
    // Port 9 (discard) on loopback: connection refused immediately
    assert!(fetcher.fetch("http://127.0.0.1:9/").await.is_none());
}
