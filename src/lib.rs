//! # pyfunc-index - Python function extraction for semantic code search
//!
//! Walks a source tree, reads every Python file, and splits it into
//! top-level function records (`code`, `function_name`, `filepath`) that an
//! embedding pipeline can consume.
//!
//! ## Overview
//!
//! Extraction is a deliberate line heuristic rather than a Python parser: a
//! function starts at a line beginning with `def ` and continues over blank
//! lines and lines starting with a space, tab, or `)`. The rules are kept
//! exactly so that output stays comparable with previously extracted
//! datasets.
//!
//! ```text
//! code root ──► FileWalker ──► FunctionExtractor ──► Vec<FunctionRecord>
//!               (*.py files)    (per-file scan)       (report / JSONL)
//! ```
//!
//! ## Modules
//!
//! - [`client`]: `ScanClient` running a full scan from a [`Config`]
//! - [`indexer`]: file walking and the function extraction heuristic
//! - [`export`]: JSON Lines output of records
//! - [`config`]: configuration with file and environment overrides
//! - [`types`]: `FunctionRecord` and `ScanResponse`
//! - [`error`]: error types
//! - [`paths`]: home expansion and platform config locations
//!
//! ## Usage Example
//!
//! ```no_run
//! use pyfunc_index::indexer::FunctionExtractor;
//!
//! let source = "def a():\n    return 1\n\ndef b():\n    return 2\n";
//! let records = FunctionExtractor::default()
//!     .extract_source(source, "example.py")
//!     .unwrap();
//! assert_eq!(records.len(), 2);
//! ```

/// Sequential scan client combining walker and extractor
pub mod client;

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// JSON Lines export of extracted records
pub mod export;

/// File walking and function extraction
pub mod indexer;

/// Path expansion and platform directories
pub mod paths;

/// Record and response types
pub mod types;

pub use client::ScanClient;
pub use config::Config;
pub use types::{FunctionRecord, ScanResponse};
