//! Detection result types.

use std::path::{Path, PathBuf};

/// Result of checking a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// Tool name as listed in the catalog.
    pub name: String,

    /// Resolved executable path, if the tool is on the search path.
    pub path: Option<PathBuf>,

    /// Display version. `None` when absent or when no version flag produced one.
    pub version: Option<String>,
}

impl DetectionResult {
    /// Create a positive detection result.
    pub fn found(name: &str, path: &Path) -> Self {
        Self {
            name: name.to_string(),
            path: Some(path.to_path_buf()),
            version: None,
        }
    }

    /// Create a negative detection result.
    pub fn not_found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            version: None,
        }
    }

    /// Set the version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Whether the tool's executable was found.
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}
