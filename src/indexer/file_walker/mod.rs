//! File walking functionality for directory traversal

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Default file name pattern for Python sources
pub const DEFAULT_FILE_PATTERN: &str = "*.py";

pub struct FileWalker {
    pub(crate) root: PathBuf,
    pub(crate) file_pattern: String,
    pub(crate) exclude_patterns: Vec<String>,
    pub(crate) respect_gitignore: bool,
    pub(crate) follow_links: bool,
}

impl FileWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            exclude_patterns: vec![],
            respect_gitignore: false,
            follow_links: false,
        }
    }

    /// Glob matched against each file name (not the full path)
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Globs matched against the path relative to the root
    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Walk the directory and collect every file whose name matches the pattern
    ///
    /// A missing root or a root that is not a directory produces an empty
    /// list. Directory entries that cannot be listed are skipped. Results are
    /// sorted by file name within each directory.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let name_matcher = self.name_matcher()?;
        let excludes = self.exclude_set()?;

        if !self.root.exists() {
            tracing::warn!("Code root does not exist: {:?}", self.root);
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            tracing::warn!("Code root is not a directory: {:?}", self.root);
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(self.respect_gitignore)
            .hidden(false) // Descend into hidden directories
            .require_git(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            // Anything but a directory is kept, so a dangling symlink fails on read
            if entry.file_type().is_none() || path.is_dir() {
                continue;
            }

            let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
                continue;
            };

            // Shell globs never match dot files with a leading `*`
            if file_name.starts_with('.') || !name_matcher.is_match(&*file_name) {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            if excludes.is_match(relative) {
                tracing::debug!("Excluded by pattern: {:?}", path);
                continue;
            }

            files.push(path.to_path_buf());
        }

        tracing::info!("Found {} files matching {}", files.len(), self.file_pattern);
        Ok(files)
    }

    pub(crate) fn name_matcher(&self) -> Result<GlobMatcher> {
        let glob = Glob::new(&self.file_pattern)
            .with_context(|| format!("Invalid file pattern '{}'", self.file_pattern))?;
        Ok(glob.compile_matcher())
    }

    pub(crate) fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid exclude pattern '{}'", pattern))?;
            builder.add(glob);
        }
        builder.build().context("Failed to compile exclude patterns")
    }
}
