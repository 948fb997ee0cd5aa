//! Catalog loading, parsing, and template substitution.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Command template substitution in [`interpolation`]
//!
//! # Example
//!
//! ```
//! use devtools_installer::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("installer.yaml");
//! fs::write(&path, "tool_list: [jq]").unwrap();
//!
//! let catalog = load_config(&path).unwrap();
//! assert_eq!(catalog.tool_list, vec!["jq".to_string()]);
//! ```

pub mod interpolation;
pub mod loader;
pub mod schema;

// Schema re-exports
pub use schema::{InstallMethod, Settings, ToolCatalog, ToolSpec, DEFAULT_TOOL};

// Loader re-exports
pub use loader::{config_path, load_config, parse_config, DEFAULT_CONFIG_FILE};

// Interpolation re-exports
pub use interpolation::{expand_command, expand_template, VERSION_PLACEHOLDER};
