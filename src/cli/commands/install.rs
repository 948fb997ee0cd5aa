//! Install command implementation.
//!
//! `devtools-installer install` (and the bare invocation) runs one pass of
//! the detect/install loop over the catalog.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::InstallArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::installer::{InstallOptions, Installer};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    config_path: PathBuf,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(config_path: &Path, args: InstallArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Catalog settings with command-line overrides applied.
    fn options(&self, base: InstallOptions) -> InstallOptions {
        InstallOptions {
            timeout: self.args.timeout.map(Duration::from_secs).or(base.timeout),
            use_default_fallback: self.args.use_default || base.use_default_fallback,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = load_config(&self.config_path)?;
        let options = self.options(InstallOptions::from_settings(&catalog.settings));
        tracing::debug!("Install options: {:?}", options);

        let runner = SystemRunner;
        let summary = Installer::new(&catalog, &runner, options).run(ui);
        tracing::info!(
            "{}/{} tools installed in {:?}",
            summary.installed(),
            summary.total(),
            summary.duration
        );

        // Per-tool failures are already rendered and do not change the exit code
        Ok(CommandResult::success())
    }
}
