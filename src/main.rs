use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pyfunc_index::config::Config;
use pyfunc_index::export::export_json_lines;
use pyfunc_index::ScanClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("GIT_COMMIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

/// Extract top-level Python functions from a source tree
#[derive(Parser, Debug)]
#[command(name = "pyfunc-index", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// Directory to scan (a leading `~` expands to the home directory)
    #[arg(long)]
    root: Option<String>,

    /// Glob matched against file names
    #[arg(long)]
    pattern: Option<String>,

    /// Glob of paths to skip, relative to the root (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Maximum lines per function block
    #[arg(long)]
    lookahead_cap: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long, env = "PYFUNC_INDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Write extracted records as JSON Lines
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::load_or_default()?,
        };
        config.apply_env_overrides();

        if let Some(root) = &self.root {
            config.scan.code_root = root.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.scan.file_pattern = pattern.clone();
        }
        if !self.exclude.is_empty() {
            config.scan.exclude_patterns = self.exclude.clone();
        }
        if let Some(cap) = self.lookahead_cap {
            config.extraction.lookahead_cap = cap;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pyfunc_index={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let client = ScanClient::with_config(cli.load_config()?)?;

    // Count is printed before extraction, which may abort the run
    let files = client.discover_files()?;
    println!("Total number of py files: {}", files.len());

    let response = client.scan_files(&files)?;
    if response.is_empty() {
        println!(
            "Double check that the code root exists and contains Python files: {}",
            response.code_root
        );
    }
    println!(
        "Total number of functions extracted: {}",
        response.functions_extracted
    );
    tracing::info!(
        "Scanned {} files in {} ms",
        response.files_found,
        response.duration_ms
    );

    if let Some(output) = &cli.output {
        export_json_lines(output, &response.records)?;
    }

    Ok(())
}
