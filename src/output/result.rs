use serde::{Deserialize, Serialize};

/// Final outcome of one crawl
///
/// Built once the worker pool has stopped. Both lists are sorted
/// lexicographically and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// The start URL as given by the caller
    pub url: String,

    pub emails: Vec<String>,

    pub phones: Vec<String>,
}

impl CrawlResult {
    /// Creates a result, sorting and deduplicating both lists
    pub fn new(url: impl Into<String>, mut emails: Vec<String>, mut phones: Vec<String>) -> Self {
        emails.sort();
        emails.dedup();
        phones.sort();
        phones.dedup();

        Self {
            url: url.into(),
            emails,
            phones,
        }
    }

    /// Returns true if no contact was found
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let result = CrawlResult::new(
            "https://example.com",
            strings(&["b@example.com", "a@example.com", "b@example.com"]),
            strings(&["+33142685300", "+14155552671"]),
        );

        assert_eq!(result.emails, strings(&["a@example.com", "b@example.com"]));
        assert_eq!(result.phones, strings(&["+14155552671", "+33142685300"]));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let result = CrawlResult::new("https://example.com", vec![], vec![]);
        assert!(result.is_empty());
    }
}
