//! Check command implementation.
//!
//! `devtools-installer check` reports which catalog tools are present and
//! never runs an installation command.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::installer::{InstallOptions, Installer};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config_path: PathBuf,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = load_config(&self.config_path)?;
        let runner = SystemRunner;
        let summary = Installer::new(&catalog, &runner, InstallOptions::default()).check(ui);

        for report in summary.unavailable() {
            tracing::debug!("'{}' is missing", report.name);
        }

        if summary.all_available() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
