//! Core library client for pyfunc-index
//!
//! Ties configuration, the file walker, and the function extractor into a
//! single sequential scan over a code root.

use crate::config::Config;
use crate::indexer::{FileWalker, FunctionExtractor};
use crate::types::{FunctionRecord, ScanResponse};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main client for scanning a code root
///
/// # Example
///
/// ```no_run
/// use pyfunc_index::{Config, ScanClient};
///
/// fn main() -> anyhow::Result<()> {
///     let mut config = Config::default();
///     config.scan.code_root = "~/src/openai-python".to_string();
///
///     let client = ScanClient::with_config(config)?;
///     let response = client.scan()?;
///     println!("Extracted {} functions", response.functions_extracted);
///     Ok(())
/// }
/// ```
pub struct ScanClient {
    config: Config,
    extractor: FunctionExtractor,
}

impl ScanClient {
    /// Create a client from the default config file and environment
    pub fn new() -> Result<Self> {
        Self::with_config(Config::new()?)
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let extractor = FunctionExtractor::new(config.extraction.lookahead_cap);
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The directory this client scans, with `~` expanded
    pub fn code_root(&self) -> PathBuf {
        self.config.scan.resolved_code_root()
    }

    /// Find every file under the code root matching the configured pattern
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let scan = &self.config.scan;
        FileWalker::new(self.code_root())
            .with_file_pattern(scan.file_pattern.clone())
            .with_exclude_patterns(scan.exclude_patterns.clone())
            .with_gitignore(scan.respect_gitignore)
            .with_follow_links(scan.follow_links)
            .walk()
    }

    /// Extract functions from each file in order
    ///
    /// The first unreadable file or malformed definition aborts the whole run.
    pub fn extract_all(&self, files: &[PathBuf]) -> Result<Vec<FunctionRecord>> {
        let mut records = Vec::new();
        for file in files {
            records.extend(self.extract_file(file)?);
        }
        tracing::info!(
            "Extracted {} functions from {} files",
            records.len(),
            files.len()
        );
        Ok(records)
    }

    pub fn extract_file(&self, path: &Path) -> Result<Vec<FunctionRecord>> {
        Ok(self.extractor.extract_file(path)?)
    }

    /// Walk the code root and extract every function
    pub fn scan(&self) -> Result<ScanResponse> {
        let start = Instant::now();
        tracing::info!("Scanning {:?}", self.code_root());

        let files = self.discover_files()?;
        let mut response = self.scan_files(&files)?;
        response.duration_ms = start.elapsed().as_millis() as u64;
        Ok(response)
    }

    /// Extract every function from already discovered files
    ///
    /// Lets callers report the file count before extraction starts.
    pub fn scan_files(&self, files: &[PathBuf]) -> Result<ScanResponse> {
        let start = Instant::now();
        let records = self.extract_all(files)?;

        Ok(ScanResponse {
            code_root: self.code_root().to_string_lossy().to_string(),
            files_found: files.len(),
            functions_extracted: records.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            records,
        })
    }
}

#[cfg(test)]
mod tests;
