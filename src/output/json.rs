use crate::output::{CrawlResult, OutputHandler, OutputResult};
use crate::url::result_file_name;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serializes a result as pretty-printed JSON with two-space indentation
pub fn render_json(result: &CrawlResult) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Prints the result to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutHandler;

impl OutputHandler for StdoutHandler {
    fn write(&self, result: &CrawlResult) -> OutputResult<()> {
        let json = render_json(result)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", json)?;
        handle.flush()?;

        Ok(())
    }
}

/// Persists the result as `<results_dir>/<domain>.json`
#[derive(Debug, Clone)]
pub struct JsonFileHandler {
    path: PathBuf,
}

impl JsonFileHandler {
    /// Creates a handler for `domain` inside `results_dir`
    pub fn new(results_dir: &Path, domain: &str) -> Self {
        Self {
            path: results_dir.join(result_file_name(domain)),
        }
    }

    /// Path the result is written to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputHandler for JsonFileHandler {
    fn write(&self, result: &CrawlResult) -> OutputResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json = render_json(result)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
