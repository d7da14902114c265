//! Extraction of function records from Python source text

use super::heuristic::{self, DEFAULT_LOOKAHEAD_CAP};
use crate::error::ExtractionError;
use crate::types::FunctionRecord;
use std::fs;
use std::iter::FusedIterator;
use std::path::Path;

/// Pulls top-level `def` blocks out of Python files
#[derive(Debug, Clone, Copy)]
pub struct FunctionExtractor {
    lookahead_cap: usize,
}

impl FunctionExtractor {
    pub fn new(lookahead_cap: usize) -> Self {
        Self { lookahead_cap }
    }

    pub fn lookahead_cap(&self) -> usize {
        self.lookahead_cap
    }

    /// Lazily yield one record per definition line, in file order
    ///
    /// A definition without a parameter list yields an error and ends the
    /// sequence; records before it have already been yielded.
    pub fn functions(&self, source: &str, filepath: impl Into<String>) -> Functions {
        Functions {
            lines: heuristic::split_lines(source),
            cursor: 0,
            filepath: filepath.into(),
            lookahead_cap: self.lookahead_cap,
            finished: false,
        }
    }

    /// Extract every function from `source`, failing on the first malformed definition
    pub fn extract_source(
        &self,
        source: &str,
        filepath: impl Into<String>,
    ) -> Result<Vec<FunctionRecord>, ExtractionError> {
        self.functions(source, filepath).collect()
    }

    /// Read a file and extract its functions
    ///
    /// Unreadable or non UTF-8 files are an error, as is any malformed
    /// definition. No partial result is returned.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<FunctionRecord>, ExtractionError> {
        let filepath = path.to_string_lossy().to_string();
        let source = fs::read_to_string(path).map_err(|e| ExtractionError::FileReadFailed {
            file: filepath.clone(),
            reason: e.to_string(),
        })?;

        let records = self.extract_source(&source, filepath)?;
        tracing::debug!("Extracted {} functions from {:?}", records.len(), path);
        Ok(records)
    }
}

impl Default for FunctionExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_CAP)
    }
}

/// Iterator returned by [`FunctionExtractor::functions`]
pub struct Functions {
    lines: Vec<String>,
    cursor: usize,
    filepath: String,
    lookahead_cap: usize,
    finished: bool,
}

impl Iterator for Functions {
    type Item = Result<FunctionRecord, ExtractionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.cursor < self.lines.len() {
            let index = self.cursor;
            self.cursor += 1;

            let line = &self.lines[index];
            if !heuristic::is_definition_line(line) {
                continue;
            }

            let Some(name) = heuristic::function_name(line) else {
                self.finished = true;
                return Some(Err(ExtractionError::MissingParameterList {
                    file: self.filepath.clone(),
                    line_number: index + 1,
                    line: line.clone(),
                }));
            };

            return Some(Ok(FunctionRecord {
                code: heuristic::collect_body(&self.lines, index, self.lookahead_cap),
                function_name: name.to_string(),
                filepath: self.filepath.clone(),
            }));
        }

        self.finished = true;
        None
    }
}

impl FusedIterator for Functions {}
