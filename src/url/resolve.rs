use url::Url;

/// Resolves an anchor href against the page it was found on
///
/// Returns None if the link cannot lead to a crawlable page:
/// - empty hrefs
/// - javascript:, mailto:, tel: and data: links
/// - hrefs that fail to resolve
/// - non-HTTP(S) URLs after resolution
///
/// The fragment is dropped so that in-page anchors map to the same entry.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use contact_sweep::url::resolve_link;
///
/// let page = Url::parse("https://example.com/docs/intro").unwrap();
/// let link = resolve_link("../about#team", &page).unwrap();
/// assert_eq!(link.as_str(), "https://example.com/about");
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    let mut absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    absolute_url.set_fragment(None);
    Some(absolute_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/dir/page").unwrap()
    }

    fn resolve(href: &str) -> Option<String> {
        resolve_link(href, &base_url()).map(|u| u.to_string())
    }

    #[test]
    fn test_absolute_link() {
        assert_eq!(
            resolve("https://other.com/page"),
            Some("https://other.com/page".to_string())
        );
    }

    #[test]
    fn test_root_relative_link() {
        assert_eq!(resolve("/other"), Some("https://example.com/other".to_string()));
    }

    #[test]
    fn test_path_relative_link() {
        assert_eq!(resolve("other"), Some("https://example.com/dir/other".to_string()));
    }

    #[test]
    fn test_protocol_relative_link() {
        assert_eq!(
            resolve("//cdn.example.com/x"),
            Some("https://cdn.example.com/x".to_string())
        );
    }

    #[test]
    fn test_fragment_stripped() {
        assert_eq!(
            resolve("/other#section"),
            Some("https://example.com/other".to_string())
        );
        assert_eq!(resolve("#top"), Some("https://example.com/dir/page".to_string()));
    }

    #[test]
    fn test_query_kept() {
        assert_eq!(
            resolve("?page=2"),
            Some("https://example.com/dir/page?page=2".to_string())
        );
    }

    #[test]
    fn test_skip_special_schemes() {
        assert_eq!(resolve("javascript:void(0)"), None);
        assert_eq!(resolve("JavaScript:alert(1)"), None);
        assert_eq!(resolve("mailto:test@example.com"), None);
        assert_eq!(resolve("tel:+1234567890"), None);
        assert_eq!(resolve("data:text/html,<h1>Test</h1>"), None);
        assert_eq!(resolve("ftp://example.com/file"), None);
    }

    #[test]
    fn test_skip_empty() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }
}
