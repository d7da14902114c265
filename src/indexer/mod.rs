//! File walking and function extraction
//!
//! Finds Python files under a code root and splits each one into
//! top-level function records ready for embedding.

mod file_walker;
mod function_extractor;
pub mod heuristic;

pub use file_walker::{DEFAULT_FILE_PATTERN, FileWalker};
pub use function_extractor::{FunctionExtractor, Functions};
