use url::Url;

/// Derives the scope key of a URL: its lowercase host plus explicit port
///
/// Default ports are omitted by the `url` crate, so `https://example.com:443/`
/// and `https://example.com/` share the key `example.com`.
///
/// # Arguments
///
/// * `url` - The URL to derive the domain from
///
/// # Returns
///
/// * `Some(String)` - `host` or `host:port`
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use contact_sweep::url::base_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(base_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(base_domain(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn base_domain(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Maps a crawled domain to the name of its result file
///
/// Every character other than ASCII alphanumerics, `.`, `-` and `_` becomes
/// `_`, so `127.0.0.1:8080` is stored as `127.0.0.1_8080.json`.
pub fn result_file_name(domain: &str) -> String {
    let stem: String = domain
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}.json", stem)
}
