//! Tool detection and installation passes.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use devtools_installer::config::parse_config;
//! use devtools_installer::installer::{InstallOptions, Installer};
//! use devtools_installer::shell::MockRunner;
//! use devtools_installer::ui::MockUI;
//!
//! let catalog = parse_config(
//!     "tool_list: [alpha]\ntools:\n  alpha:\n    methods:\n      - name: direct\n        commands: [\"install-alpha\"]\n",
//!     Path::new("installer.yaml"),
//! )
//! .unwrap();
//!
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//! let installer = Installer::with_search_path(&catalog, &runner, InstallOptions::default(), vec![]);
//! let summary = installer.run(&mut ui);
//!
//! assert_eq!((summary.installed(), summary.total()), (1, 1));
//! assert!(runner.was_invoked("install-alpha"));
//! ```

pub mod driver;
pub mod outcome;

pub use driver::{InstallOptions, Installer, RUN_HEADER};
pub use outcome::{RunSummary, ToolOutcome, ToolReport};
