use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// `local@domain.tld` with a letters-only top-level label of 2+ characters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is valid")
});

/// Extracts every email-shaped substring from `text`
///
/// # Examples
///
/// ```
/// use contact_sweep::extract_emails;
///
/// let emails = extract_emails("Write to info@example.org today");
/// assert!(emails.contains("info@example.org"));
/// ```
pub fn extract_emails(text: &str) -> HashSet<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_multiple_addresses() {
        let emails = extract_emails("Contact us at sales@example.co.uk or support@test.io!");
        assert_eq!(emails, set(&["sales@example.co.uk", "support@test.io"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let emails = extract_emails("a@b.com, a@b.com and again a@b.com");
        assert_eq!(emails, set(&["a@b.com"]));
    }

    #[test]
    fn test_local_part_characters() {
        let emails = extract_emails("first.last+tag%x_y-z@mail-host.example.com");
        assert_eq!(emails, set(&["first.last+tag%x_y-z@mail-host.example.com"]));
    }

    #[test]
    fn test_requires_alphabetic_tld() {
        assert!(extract_emails("user@host.1").is_empty());
        assert!(extract_emails("user@host.c").is_empty());
        assert!(extract_emails("user@localhost").is_empty());
    }

    #[test]
    fn test_no_addresses() {
        assert!(extract_emails("").is_empty());
        assert!(extract_emails("no contact details here @ all").is_empty());
    }

    #[test]
    fn test_is_idempotent() {
        let text = "x@y.org; z@w.net; broken@; @nothing.com";
        assert_eq!(extract_emails(text), extract_emails(text));
    }
}
