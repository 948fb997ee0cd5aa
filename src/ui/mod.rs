//! Terminal output for check and install runs.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] which records every call for tests
//! - The [`InstallerTheme`] and the indicatif-backed [`ProgressIndicator`]
//!
//! # Example
//!
//! ```
//! use devtools_installer::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("System Tools Check");
//! ui.tool_missing("nmap");
//! ui.show_summary(0, 1, "installed");
//!
//! assert_eq!(ui.missing(), &["nmap".to_string()]);
//! assert_eq!(ui.summaries(), &[(0, 1, "installed".to_string())]);
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, UiEvent};
pub use output::OutputMode;
pub use spinner::{ProgressIndicator, TICK_INTERVAL};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, InstallerTheme, SPINNER_GLYPHS};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show the run banner.
    fn show_header(&mut self, title: &str);

    /// Report a tool that is already installed.
    fn tool_present(&mut self, name: &str, version: Option<&str>);

    /// Report a tool that is not installed.
    fn tool_missing(&mut self, name: &str);

    /// Announce an installation method attempt.
    fn method_started(&mut self, tool: &str, method: &str);

    /// Report a successful installation.
    fn tool_installed(&mut self, tool: &str, method: &str);

    /// Report that a tool could not be installed.
    fn tool_failed(&mut self, tool: &str, reason: &str);

    /// Surface one line of installation command output.
    fn command_output(&mut self, line: &str);

    /// Display a plain line. Shown in every output mode.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for a running command.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show the closing `done/total` line.
    fn show_summary(&mut self, done: usize, total: usize, label: &str);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop rendering and clear the spinner line.
    ///
    /// No further writes happen once this returns. Calling it again is a
    /// no-op.
    fn stop(&mut self);
}
