/// Platform-specific path computation
///
/// Resolves the user's home directory for `~` expansion of the code root and
/// locates the config file following the XDG Base Directory specification on
/// Unix-like systems.
use std::path::{Path, PathBuf};

/// Directory name used under the platform config dir
const PROJECT_DIR_NAME: &str = "pyfunc-index";

/// Platform-agnostic path utilities
pub struct PlatformPaths;

impl PlatformPaths {
    /// The process's notion of the home directory, falling back to "."
    pub fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Expand a leading `~` (alone or followed by `/`) to the home directory
    ///
    /// `~user` forms are left untouched.
    pub fn expand_home(path: &str) -> PathBuf {
        Self::expand_home_with(path, &Self::home_dir())
    }

    pub(crate) fn expand_home_with(path: &str, home: &Path) -> PathBuf {
        if path == "~" {
            return home.to_path_buf();
        }
        match path.strip_prefix("~/") {
            Some(rest) => home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }

    /// Get the appropriate config directory for the current platform
    ///
    /// - Windows: %APPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else if cfg!(target_os = "macos") {
            Self::home_dir().join("Library/Application Support")
        } else {
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::home_dir().join(".config"))
        }
    }

    /// Returns: {config_dir}/pyfunc-index
    pub fn project_config_dir() -> PathBuf {
        Self::config_dir().join(PROJECT_DIR_NAME)
    }

    /// Returns: {config_dir}/pyfunc-index/config.toml
    pub fn default_config_path() -> PathBuf {
        Self::project_config_dir().join("config.toml")
    }
}
