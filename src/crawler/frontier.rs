//! Frontier queue with quiescence detection
//!
//! The frontier is a FIFO of candidate URLs shared by every worker. It does
//! not deduplicate; claims are arbitrated by the `VisitedGuard`.
//!
//! Completion is tracked with an explicit count of unfinished entries: an
//! entry is unfinished from `put` until the matching `mark_done`, whether
//! it is still queued or held by a worker. `join` returns once that count
//! reaches zero.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct FrontierState {
    queue: VecDeque<String>,
    unfinished: usize,
}

/// Concurrent FIFO of URLs awaiting processing
#[derive(Debug, Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
    item_ready: Notify,
    drained: Notify,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FrontierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueues `url` unconditionally
    pub fn put(&self, url: impl Into<String>) {
        {
            let mut state = self.lock();
            state.queue.push_back(url.into());
            state.unfinished += 1;
        }
        self.item_ready.notify_one();
    }

    /// Waits for the next entry
    ///
    /// The returned ticket acknowledges the entry when dropped, so every exit
    /// path of the caller's processing marks it done exactly once.
    pub async fn get(&self) -> FrontierTicket<'_> {
        loop {
            // Register interest before checking, so a put between the check
            // and the await still wakes this waiter.
            let notified = self.item_ready.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let next = self.lock().queue.pop_front();
            if let Some(url) = next {
                return FrontierTicket {
                    frontier: self,
                    url,
                };
            }

            notified.await;
        }
    }

    /// Acknowledges one previously taken entry as fully processed
    ///
    /// Prefer dropping the `FrontierTicket` returned by `get`.
    pub fn mark_done(&self) {
        let drained = {
            let mut state = self.lock();
            match state.unfinished.checked_sub(1) {
                Some(remaining) => {
                    state.unfinished = remaining;
                    remaining == 0
                }
                None => {
                    tracing::error!("mark_done called more times than entries were put");
                    false
                }
            }
        };

        if drained {
            self.drained.notify_waiters();
        }
    }

    /// Waits until every entry ever put has been marked done
    pub async fn join(&self) {
        loop {
            let notified = self.drained.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let unfinished = self.lock().unfinished;
            if unfinished == 0 {
                return;
            }

            notified.await;
        }
    }

    /// Number of entries waiting to be taken
    #[cfg(test)]
    pub(crate) fn queued(&self) -> usize {
        self.lock().queue.len()
    }

    /// Number of entries put but not yet marked done
    #[cfg(test)]
    pub(crate) fn unfinished(&self) -> usize {
        self.lock().unfinished
    }
}

/// An entry taken from the frontier, acknowledged on drop
#[derive(Debug)]
pub struct FrontierTicket<'a> {
    frontier: &'a Frontier,
    url: String,
}

impl FrontierTicket<'_> {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for FrontierTicket<'_> {
    fn drop(&mut self) {
        self.frontier.mark_done();
    }
}
