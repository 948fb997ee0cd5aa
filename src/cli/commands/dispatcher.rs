//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::config::config_path;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Configuration errors are returned; everything else is rendered
    /// through `ui` and reflected in the [`CommandResult`].
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Process exit status. Codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
    no_color: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given catalog path.
    pub fn new(config_path: PathBuf, no_color: bool) -> Self {
        Self {
            config_path,
            no_color,
        }
    }

    /// Create a dispatcher from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(config_path(cli.config.as_deref()), cli.no_color)
    }

    /// Get the catalog path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(&self.config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check) => {
                let cmd = super::check::CheckCommand::new(&self.config_path);
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd =
                    super::list::ListCommand::new(&self.config_path, args.clone(), self.no_color);
                cmd.execute(ui)
            }
            None => {
                // Default to install with default args
                let cmd =
                    super::install::InstallCommand::new(&self.config_path, InstallArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
