//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{InstallerTheme, OutputMode, ProgressIndicator, SpinnerHandle, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: InstallerTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with an explicit theme.
    pub fn new(mode: OutputMode, theme: InstallerTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Create a terminal UI, picking colors from the environment.
    pub fn detect(mode: OutputMode, no_color: bool) -> Self {
        Self::new(mode, InstallerTheme::detect(no_color))
    }

    /// The theme used for rendering.
    pub fn theme(&self) -> &InstallerTheme {
        &self.theme
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        let header = self.theme.format_header(title);
        writeln!(self.term, "\n{}", header).ok();
    }

    fn tool_present(&mut self, name: &str, version: Option<&str>) {
        let line = self.theme.format_present(name, version);
        self.line(&line);
    }

    fn tool_missing(&mut self, name: &str) {
        let line = self.theme.format_missing(name);
        self.line(&line);
    }

    fn method_started(&mut self, tool: &str, method: &str) {
        if self.mode.shows_narration() {
            let line = self.theme.format_method(tool, method);
            self.line(&line);
        }
    }

    fn tool_installed(&mut self, tool: &str, method: &str) {
        let line = self.theme.format_installed(tool, method);
        self.line(&line);
    }

    fn tool_failed(&mut self, tool: &str, reason: &str) {
        let line = self.theme.format_tool_failed(tool, reason);
        self.line(&line);
    }

    fn command_output(&mut self, line: &str) {
        if self.mode.shows_narration() {
            let line = self.theme.format_output(line);
            self.line(&line);
        }
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.line(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_failure(msg);
        self.line(&line);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressIndicator::start(message, &self.theme))
        } else {
            Box::new(ProgressIndicator::hidden())
        }
    }

    fn show_summary(&mut self, done: usize, total: usize, label: &str) {
        let summary = self.theme.format_summary(done, total, label);
        writeln!(self.term, "{}\n", summary).ok();
    }
}
