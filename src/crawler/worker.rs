//! Crawl workers
//!
//! Each worker loops over the shared frontier: claim, fetch, parse, extract,
//! enqueue same-domain links. Workers never stop on their own; the
//! coordinator flips the shared run state once the frontier has drained.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::extract::{extract_emails, extract_phones};
use crate::state::{Claim, Discoveries, VisitedGuard};
use crate::url::CrawlTarget;
use std::sync::Arc;
use tokio::sync::watch;
use url::Url;

/// Lifecycle flag shared by the coordinator and every worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// State shared by every worker for the duration of one crawl
#[derive(Debug)]
pub struct CrawlContext {
    pub target: CrawlTarget,
    pub frontier: Frontier,
    pub visited: VisitedGuard,
    pub discoveries: Discoveries,
    pub fetcher: Fetcher,
}

impl CrawlContext {
    pub fn new(target: CrawlTarget, max_pages: usize, fetcher: Fetcher) -> Self {
        Self {
            target,
            frontier: Frontier::new(),
            visited: VisitedGuard::new(max_pages),
            discoveries: Discoveries::new(),
            fetcher,
        }
    }
}

/// What happened to one frontier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Not claimed: over budget or already visited
    Skipped(Claim),

    /// Claimed, but the fetch produced no text
    NoContent,

    /// Fetched and parsed
    Processed {
        emails: usize,
        phones: usize,
        enqueued: usize,
    },
}

/// A single crawl worker
pub struct Worker {
    id: usize,
    context: Arc<CrawlContext>,
}

impl Worker {
    pub fn new(id: usize, context: Arc<CrawlContext>) -> Self {
        Self { id, context }
    }

    /// Runs until the run state becomes `Stopped`
    ///
    /// The state is checked between entries and while waiting on an empty
    /// frontier. An entry already taken is always finished first.
    pub async fn run(self, mut run_state: watch::Receiver<RunState>) {
        tracing::debug!("Worker {} started", self.id);

        loop {
            let state = *run_state.borrow();
            if state == RunState::Stopped {
                break;
            }

            let ticket = tokio::select! {
                ticket = self.context.frontier.get() => ticket,
                changed = run_state.changed() => {
                    if changed.is_err() {
                        // coordinator gone
                        break;
                    }
                    continue;
                }
            };

            let outcome = self.process(ticket.url()).await;
            tracing::trace!("Worker {} finished {}: {:?}", self.id, ticket.url(), outcome);
            // dropping the ticket marks the entry done
        }

        tracing::debug!("Worker {} stopped", self.id);
    }

    /// Processes one frontier entry
    ///
    /// 1. Claim the URL; skip if over budget or already visited
    /// 2. Fetch; skip on any failure (the URL stays claimed)
    /// 3. Extract text and links
    /// 4. Merge emails and phones into the shared accumulators
    /// 5. Enqueue in-scope links not yet visited
    pub async fn process(&self, url: &str) -> PageOutcome {
        let ctx = &self.context;

        let claim = ctx.visited.try_claim(url);
        if !claim.is_claimed() {
            tracing::debug!("Skipping {}: {:?}", url, claim);
            return PageOutcome::Skipped(claim);
        }

        let html = match ctx.fetcher.fetch(url).await {
            Some(html) if !html.is_empty() => html,
            _ => return PageOutcome::NoContent,
        };

        let page_url = match Url::parse(url) {
            Ok(page_url) => page_url,
            Err(e) => {
                tracing::warn!("Cannot resolve links on {}: {}", url, e);
                return PageOutcome::NoContent;
            }
        };

        let parsed = parse_html(&html, &page_url);

        let emails = extract_emails(&parsed.text);
        let phones = extract_phones(&parsed.text);
        let (email_count, phone_count) = (emails.len(), phones.len());
        ctx.discoveries.add_emails(emails);
        ctx.discoveries.add_phones(phones);

        let mut enqueued = 0;
        for link in parsed.links {
            if !ctx.target.in_scope(&link) {
                tracing::trace!("Out of scope: {}", link);
                continue;
            }

            let link = String::from(link);
            if ctx.visited.contains(&link) {
                continue;
            }

            ctx.frontier.put(link);
            enqueued += 1;
        }

        tracing::debug!(
            "Processed {}: {} emails, {} phones, {} links enqueued",
            url,
            email_count,
            phone_count,
            enqueued
        );

        PageOutcome::Processed {
            emails: email_count,
            phones: phone_count,
            enqueued,
        }
    }
}
