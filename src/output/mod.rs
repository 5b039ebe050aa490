//! Output module for emitting crawl results
//!
//! This module handles:
//! - The `CrawlResult` record produced at the end of every crawl
//! - Pretty-printed JSON on stdout
//! - One JSON file per crawled domain, overwritten by later runs

mod json;
mod result;

pub use json::{render_json, JsonFileHandler, StdoutHandler};
pub use result::CrawlResult;

use crate::config::OutputConfig;
use crate::OutputError;
use std::path::Path;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// Each handler delivers a finished crawl result to one destination.
pub trait OutputHandler {
    /// Writes the result to this handler's destination
    fn write(&self, result: &CrawlResult) -> OutputResult<()>;
}

/// Emits a result to every destination enabled in `config`
///
/// # Arguments
///
/// * `result` - The finished crawl result
/// * `domain` - The crawled domain, which names the result file
/// * `config` - Output settings
pub fn emit(result: &CrawlResult, domain: &str, config: &OutputConfig) -> OutputResult<()> {
    if result.is_empty() {
        tracing::info!("No contacts found on {}", domain);
    }

    if config.print_stdout {
        StdoutHandler.write(result)?;
    }

    let file_handler = JsonFileHandler::new(Path::new(&config.results_dir), domain);
    file_handler.write(result)?;
    tracing::info!("Result written to {}", file_handler.path().display());

    Ok(())
}
