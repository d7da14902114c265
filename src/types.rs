use serde::{Deserialize, Serialize};

/// A top-level Python function pulled out of a source file
///
/// Field names match the columns downstream embedding notebooks expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Definition line plus its collected body, joined with `\n`
    pub code: String,
    /// Text between `def ` and the first `(` of the definition line
    pub function_name: String,
    /// Path of the file the function was found in
    pub filepath: String,
}

/// Result of scanning a code root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// The directory that was walked
    pub code_root: String,
    /// Number of files matching the file pattern
    pub files_found: usize,
    /// Number of function records extracted across all files
    pub functions_extracted: usize,
    /// Time taken in milliseconds
    pub duration_ms: u64,
    /// Every record, in walk order then file order
    #[serde(default)]
    pub records: Vec<FunctionRecord>,
}

impl ScanResponse {
    /// True when the walk found nothing to scan
    pub fn is_empty(&self) -> bool {
        self.files_found == 0
    }
}
