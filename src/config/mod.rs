/// Configuration system for pyfunc-index
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::{ConfigError, PyFuncError, ValidationError};
use crate::indexer::DEFAULT_FILE_PATTERN;
use crate::indexer::heuristic::DEFAULT_LOOKAHEAD_CAP;
use globset::Glob;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where and what to scan
    #[serde(default)]
    pub scan: ScanConfig,

    /// Function extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Directory walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory to scan; a leading `~` expands to the home directory
    #[serde(default = "default_code_root")]
    pub code_root: String,

    /// Glob matched against file names
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Globs matched against paths relative to the code root
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Honor .gitignore and .ignore files
    #[serde(default)]
    pub respect_gitignore: bool,

    /// Follow symbolic links to directories
    #[serde(default)]
    pub follow_links: bool,
}

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum lines per function block, definition line included.
    /// Changing this changes which lines end up in each record.
    #[serde(default = "default_lookahead_cap")]
    pub lookahead_cap: usize,
}

fn default_code_root() -> String {
    "~/Desktop/work/tutorials_embeddings/08-Code_search".to_string()
}

fn default_file_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

fn default_lookahead_cap() -> usize {
    DEFAULT_LOOKAHEAD_CAP
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            code_root: default_code_root(),
            file_pattern: default_file_pattern(),
            exclude_patterns: Vec::new(),
            respect_gitignore: false,
            follow_links: false,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            lookahead_cap: default_lookahead_cap(),
        }
    }
}

impl ScanConfig {
    /// Code root with `~` expanded
    pub fn resolved_code_root(&self) -> PathBuf {
        crate::paths::PlatformPaths::expand_home(&self.code_root)
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, PyFuncError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or create default
    pub fn load_or_default() -> Result<Self, PyFuncError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), PyFuncError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), PyFuncError> {
        if self.scan.code_root.trim().is_empty() {
            return Err(ValidationError::Empty("code root".to_string()).into());
        }

        if self.scan.file_pattern.is_empty() {
            return Err(ValidationError::Empty("file pattern".to_string()).into());
        }

        for pattern in std::iter::once(&self.scan.file_pattern).chain(&self.scan.exclude_patterns) {
            Glob::new(pattern).map_err(|e| ValidationError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.kind().to_string(),
            })?;
        }

        if self.extraction.lookahead_cap == 0 {
            return Err(ConfigError::InvalidValue {
                key: "extraction.lookahead_cap".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("PYFUNC_INDEX_CODE_ROOT") {
            self.scan.code_root = root;
        }

        if let Ok(pattern) = std::env::var("PYFUNC_INDEX_FILE_PATTERN") {
            self.scan.file_pattern = pattern;
        }

        if let Ok(cap) = std::env::var("PYFUNC_INDEX_LOOKAHEAD_CAP") {
            match cap.parse() {
                Ok(cap) => self.extraction.lookahead_cap = cap,
                Err(_) => tracing::warn!("Ignoring invalid PYFUNC_INDEX_LOOKAHEAD_CAP: {}", cap),
            }
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, PyFuncError> {
        let mut config = Self::load_or_default()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}
