//! Shared crawl state
//!
//! Every set mutated by more than one worker lives here, behind a single
//! lock per structure, so the claim and merge rules are auditable in one
//! place.
//!
//! # Components
//!
//! - `VisitedGuard`: claimed URLs, enforcing at-most-once processing and the page budget
//! - `Discoveries`: append-only email and phone accumulators

mod discoveries;
mod visited;

// Re-export main types
pub use discoveries::Discoveries;
pub use visited::{Claim, VisitedGuard};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a mutex, recovering the data if a worker panicked while holding it
///
/// The guarded sets are append-only, so a poisoned lock never exposes a
/// half-applied update.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
