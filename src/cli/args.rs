//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::OutputMode;

/// devtools-installer - Detect and install development tools.
#[derive(Debug, Parser)]
#[command(name = "devtools-installer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tool catalog (default: installer.yaml)
    #[arg(short, long, global = true, env = "DEVTOOLS_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show every line of installation command output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output: no spinners or method narration
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing tools (default if no command specified)
    Install(InstallArgs),

    /// Report which tools are present without installing anything
    Check,

    /// List the tools in the catalog
    List(ListArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Kill any installation command running longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Install listed tools without their own entry using the `default` entry
    #[arg(long)]
    pub use_default: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
