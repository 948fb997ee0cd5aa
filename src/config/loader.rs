//! Catalog file loading.
//!
//! The catalog is read once at startup from a single YAML file
//! (`installer.yaml` in the working directory unless overridden) and
//! stays immutable for the rest of the run.

use crate::config::schema::ToolCatalog;
use crate::error::{InstallerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "installer.yaml";

/// Resolve the catalog path from an optional override.
pub fn config_path(config_override: Option<&Path>) -> PathBuf {
    config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load a catalog file and parse it into a [`ToolCatalog`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML doesn't match the catalog shape.
pub fn load_config(path: &Path) -> Result<ToolCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InstallerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InstallerError::Io(e)
        }
    })?;

    let catalog = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded {} tool(s), {} catalog entries from {}",
        catalog.tool_list.len(),
        catalog.tools.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse YAML content into a [`ToolCatalog`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolCatalog> {
    // An empty document is an empty catalog
    if content.trim().is_empty() {
        return Ok(ToolCatalog::default());
    }

    serde_yaml::from_str(content).map_err(|e| InstallerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
