use crate::state::lock;
use std::collections::HashSet;
use std::sync::Mutex;

/// Outcome of trying to claim a URL for processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The URL was inserted; the caller owns its processing
    Claimed,

    /// Another worker claimed the URL earlier
    AlreadyVisited,

    /// The page budget is spent; the URL is dropped even if never visited
    BudgetExhausted,
}

impl Claim {
    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed)
    }
}

/// The set of claimed URLs, shared by every worker
///
/// A URL enters the set at most once and is never removed. Claiming marks
/// a URL as owned whether or not its fetch later succeeds, so failed pages
/// are not retried.
///
/// Keys are URLs as resolved by [`resolve_link`](crate::url::resolve_link),
/// which drops fragments: `/a#x` and `/a` are one entry and spend one unit
/// of the page budget between them. Query strings are kept, so `/a?` and
/// `/a` are counted separately.
#[derive(Debug)]
pub struct VisitedGuard {
    claimed: Mutex<HashSet<String>>,
    max_pages: usize,
}

impl VisitedGuard {
    /// Creates an empty guard admitting at most `max_pages` claims
    pub fn new(max_pages: usize) -> Self {
        Self {
            claimed: Mutex::new(HashSet::new()),
            max_pages,
        }
    }

    /// Attempts to claim `url`
    ///
    /// The budget is checked before membership, both under the same lock:
    /// once `max_pages` URLs are claimed every further URL is declined as
    /// `BudgetExhausted`, visited or not, and the set never grows past the
    /// budget.
    pub fn try_claim(&self, url: &str) -> Claim {
        let mut claimed = lock(&self.claimed);

        if claimed.len() >= self.max_pages {
            return Claim::BudgetExhausted;
        }

        if claimed.insert(url.to_string()) {
            Claim::Claimed
        } else {
            Claim::AlreadyVisited
        }
    }

    /// Returns true if `url` has been claimed
    pub fn contains(&self, url: &str) -> bool {
        lock(&self.claimed).contains(url)
    }

    /// Returns true once the page budget is spent
    pub fn budget_exhausted(&self) -> bool {
        self.claimed_count() >= self.max_pages
    }

    /// Number of claimed URLs
    pub fn claimed_count(&self) -> usize {
        lock(&self.claimed).len()
    }
}
