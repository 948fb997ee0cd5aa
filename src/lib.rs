//! devtools-installer - Detect and install development tools from a YAML catalog.
//!
//! The installer reads a catalog of tools (`installer.yaml`), checks each
//! listed tool against the search path, and installs missing ones by trying
//! their declared installation methods in order.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Catalog schema, loading, and command template substitution
//! - [`detection`] - Search path lookup and version extraction
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The detect/install driver loop
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Spinners, theming, and terminal output
//!
//! # Example
//!
//! ```
//! use devtools_installer::detection::extract_version;
//!
//! assert_eq!(extract_version("go version go1.23.3 linux/amd64"), "1.23.3");
//! assert_eq!(extract_version("amass - v4.5.6"), "4.5.6");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod installer;
pub mod shell;
pub mod ui;

pub use error::{InstallerError, Result};
