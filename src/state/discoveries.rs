use crate::state::lock;
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Crawl-wide email and phone accumulators
///
/// Both sets only grow. `BTreeSet` keeps them deduplicated and in
/// lexicographic order, so snapshots are already sorted.
#[derive(Debug, Default)]
pub struct Discoveries {
    emails: Mutex<BTreeSet<String>>,
    phones: Mutex<BTreeSet<String>>,
}

impl Discoveries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges emails found on one page
    pub fn add_emails<I>(&self, found: I)
    where
        I: IntoIterator<Item = String>,
    {
        lock(&self.emails).extend(found);
    }

    /// Merges phone numbers found on one page
    pub fn add_phones<I>(&self, found: I)
    where
        I: IntoIterator<Item = String>,
    {
        lock(&self.phones).extend(found);
    }

    /// Sorted copy of every email seen so far
    pub fn emails(&self) -> Vec<String> {
        lock(&self.emails).iter().cloned().collect()
    }

    /// Sorted copy of every phone number seen so far
    pub fn phones(&self) -> Vec<String> {
        lock(&self.phones).iter().cloned().collect()
    }
}
