use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

/// Optional country-code prefix, then at least seven digits that may be
/// separated by spaces, hyphens or parentheses
///
/// Digits are ASCII only, matching what [`normalize_phone`] keeps.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[\s\-()]*)?(?:[0-9][\s\-()]*){7,}")
        .expect("phone pattern is valid")
});

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Extracts phone numbers from `text`, normalized to `+` followed by digits
///
/// Candidates are normalized with [`normalize_phone`] and kept only when
/// [`is_valid_phone`] accepts them.
///
/// # Examples
///
/// ```
/// use contact_sweep::extract_phones;
///
/// let phones = extract_phones("Call +1 (415) 555-2671 now");
/// assert!(phones.contains("+14155552671"));
/// ```
pub fn extract_phones(text: &str) -> HashSet<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| normalize_phone(m.as_str()))
        .filter(|phone| is_valid_phone(phone))
        .collect()
}

/// Strips every character except digits and `+`
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Heuristic filter for normalized candidates
///
/// Accepts 10 to 15 digits behind a leading `+`, using more than two
/// distinct digits.
pub fn is_valid_phone(phone: &str) -> bool {
    if !phone.starts_with('+') {
        return false;
    }

    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_DIGITS || digits.len() > MAX_DIGITS {
        return false;
    }

    // rejects runs like 0000000000 or 1212121212
    let distinct: BTreeSet<char> = digits.into_iter().collect();
    distinct.len() > 2
}
