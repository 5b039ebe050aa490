use crate::url::domain::base_domain;
use crate::{UrlError, UrlResult};
use url::Url;

/// The start URL of a crawl together with the domain that bounds it
///
/// The domain is derived once and every discovered URL is compared
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    url: Url,
    domain: String,
}

impl CrawlTarget {
    /// Parses a start URL; it must be HTTP(S) and carry a host
    pub fn parse(start_url: &str) -> UrlResult<Self> {
        let url = Url::parse(start_url.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                url.scheme()
            )));
        }

        let domain = base_domain(&url).ok_or(UrlError::MissingDomain)?;

        Ok(Self { url, domain })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true if `url` shares the exact host:port of the start URL
    pub fn in_scope(&self, url: &Url) -> bool {
        base_domain(url).as_deref() == Some(self.domain.as_str())
    }
}
