//! HTML parser for extracting page text and links
//!
//! This module turns fetched markup into:
//! - The visible text, fed to the contact extractors
//! - The anchor links, resolved against the page URL
//!
//! html5ever recovers from malformed markup, so parsing never fails; broken
//! documents simply yield less text and fewer links.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Text nodes outside hidden elements, trimmed and joined by spaces
    pub text: String,

    /// Absolute HTTP(S) URLs of every `<a href>` on the page, fragments removed
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts visible text and anchor links
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags anywhere in the document
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` and `data:` links
/// - hrefs that do not resolve to an HTTP(S) URL
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL of the page, used to resolve relative links
///
/// # Example
///
/// ```
/// use contact_sweep::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><body><p>Mail <b>me</b></p><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url);
/// assert_eq!(parsed.text, "Mail me Link");
/// assert_eq!(parsed.links[0].as_str(), "https://example.com/page");
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: extract_text(&document),
        links: extract_links(&document, base_url),
    }
}

/// Collects the visible text of the document
fn extract_text(document: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

/// Extracts all followable anchor links from the document
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}
