//! Metadata Fetcher for LinkStash.
//!
//! Performs a best-effort GET of a bookmarked URL and extracts page metadata
//! (title, description, preview image) with heuristic tag scanning. Never
//! raises to callers: any network, timeout, or malformed-URL condition
//! collapses to `None`.

use std::future::Future;
use std::time::Duration;

use crate::types::metadata::LinkMetadata;

/// Bounded fetch timeout so a slow host resolves to `None` instead of hanging.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait defining the metadata fetch capability.
///
/// The enrichment coordinator is generic over this seam so tests can inject
/// fetchers with controlled timing and canned results.
pub trait FetchMetadata: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<LinkMetadata>> + Send;
}

/// Metadata fetcher backed by an HTTP client with a request timeout.
pub struct MetadataFetcher {
    client: reqwest::Client,
}

impl MetadataFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("linkstash/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("failed to configure HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl Default for MetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchMetadata for MetadataFetcher {
    /// Fetches the URL and extracts metadata from the response body.
    ///
    /// Returns `Some` with whatever the page provided (possibly all-`None`
    /// fields) on a successful fetch, and `None` on any failure.
    async fn fetch(&self, url: &str) -> Option<LinkMetadata> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("metadata fetch failed for {}: {}", url, e);
                return None;
            }
        };

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                log::debug!("metadata body read failed for {}: {}", url, e);
                return None;
            }
        };

        Some(extract_metadata(&html))
    }
}

/// Extracts page metadata from raw HTML.
///
/// Priority order, first non-blank wins:
/// - title: `og:title` meta content, else the `<title>` text
/// - description: `og:description`, else `meta name="description"`
/// - image: `og:image`, else the `link rel="icon"` href
pub fn extract_metadata(html: &str) -> LinkMetadata {
    let title = meta_content(html, "property", "og:title")
        .or_else(|| tag_text(html, "title"));
    let description = meta_content(html, "property", "og:description")
        .or_else(|| meta_content(html, "name", "description"));
    let image_url = meta_content(html, "property", "og:image").or_else(|| icon_href(html));

    LinkMetadata {
        title,
        description,
        image_url,
    }
}

/// Trims a candidate value, rejecting blanks.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Collects the raw text of every `<name ...>` tag, case-insensitively.
///
/// Tag names are ASCII, so locating them in an ASCII-lowercased copy keeps
/// byte offsets valid in the original.
fn tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", name);
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(pos) = lower[from..].find(&open) {
        let start = from + pos;
        let after = start + open.len();
        // Reject prefixes of longer tag names, e.g. <metadata> for "meta"
        let boundary = match lower.as_bytes().get(after) {
            Some(b) => b.is_ascii_whitespace() || *b == b'>' || *b == b'/',
            None => false,
        };
        match lower[after..].find('>') {
            Some(end) => {
                if boundary {
                    found.push(&html[start..after + end]);
                }
                from = after + end + 1;
            }
            None => break,
        }
    }
    found
}

/// Returns the value of an attribute inside a raw tag, handling double,
/// single, and missing quotes. Attribute names match case-insensitively.
fn tag_attr(tag: &str, name: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let needle = format!("{}=", name);
    let mut from = 0;

    while let Some(pos) = lower[from..].find(&needle) {
        let at = from + pos;
        let value_start = at + needle.len();
        // The match must start at a word boundary: "data-name=" is not "name="
        let boundary = at == 0
            || !(lower.as_bytes()[at - 1].is_ascii_alphanumeric()
                || lower.as_bytes()[at - 1] == b'-'
                || lower.as_bytes()[at - 1] == b'_');
        if !boundary {
            from = value_start;
            continue;
        }

        let rest = &tag[value_start..];
        let mut chars = rest.chars();
        return match chars.next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &rest[1..];
                body.find(quote).map(|end| body[..end].to_string())
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '/')
                    .unwrap_or(rest.len());
                Some(rest[..end].to_string())
            }
            None => None,
        };
    }
    None
}

/// Returns the `content` of the first `<meta>` tag whose `key_attr`
/// attribute equals `key_value` (e.g. `property="og:title"`).
fn meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    tags(html, "meta").into_iter().find_map(|tag| {
        let matches = tag_attr(tag, key_attr)
            .map(|v| v.eq_ignore_ascii_case(key_value))
            .unwrap_or(false);
        if matches {
            tag_attr(tag, "content").and_then(|content| non_blank(&content))
        } else {
            None
        }
    })
}

/// Returns the href of the first `<link>` tag whose rel tokens mention an icon.
fn icon_href(html: &str) -> Option<String> {
    tags(html, "link").into_iter().find_map(|tag| {
        let rel = tag_attr(tag, "rel")?.to_ascii_lowercase();
        if rel.split_whitespace().any(|token| token.contains("icon")) {
            tag_attr(tag, "href").and_then(|href| non_blank(&href))
        } else {
            None
        }
    })
}

/// Extracts the text between a tag pair, e.g. the `<title>` contents.
fn tag_text(html: &str, name: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", name);
    let close = format!("</{}>", name);

    let start_idx = lower.find(&open)?;
    let tag_end = lower[start_idx..].find('>')?;
    let content_start = start_idx + tag_end + 1;
    let end_idx = lower[content_start..].find(&close)?;
    non_blank(&html[content_start..content_start + end_idx])
}
