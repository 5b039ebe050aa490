//! URL handling module for Contact-Sweep
//!
//! This module provides domain derivation for scope filtering, link
//! resolution against the page being processed, and the mapping from a
//! crawled domain to its result file name.

mod domain;
mod resolve;
mod target;

// Re-export main functions
pub use domain::{base_domain, result_file_name};
pub use resolve::resolve_link;
pub use target::CrawlTarget;
