//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and records every call,
//! including spinner starts and stops, in one ordered event log. Spinners
//! handed out by the mock write to the same log, so tests can check that
//! no output was printed while a spinner was running.
//!
//! # Example
//!
//! ```
//! use devtools_installer::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut spinner = ui.start_spinner("Installing go (binary): wget");
//! spinner.stop();
//! ui.command_output("go: downloading golang.org/x/net v0.31.0");
//!
//! assert_eq!(ui.spinner_starts(), 1);
//! assert_eq!(ui.spinner_stops(), 1);
//! assert!(!ui.output_while_spinning());
//! assert!(matches!(ui.events().last(), Some(UiEvent::Output(_))));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// One recorded UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Header(String),
    Present {
        name: String,
        version: Option<String>,
    },
    Missing(String),
    MethodStarted {
        tool: String,
        method: String,
    },
    Installed {
        tool: String,
        method: String,
    },
    Failed {
        tool: String,
        reason: String,
    },
    Output(String),
    Message(String),
    Warning(String),
    Error(String),
    SpinnerStarted(String),
    SpinnerStopped,
    Summary {
        done: usize,
        total: usize,
        label: String,
    },
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: EventLog,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            events: EventLog::default(),
        }
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Every recorded event, in order.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    fn collect<T>(&self, pick: impl Fn(&UiEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }

    /// Headers shown.
    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(title) => Some(title.clone()),
            _ => None,
        })
    }

    /// Tools reported present, with their versions.
    pub fn present(&self) -> Vec<(String, Option<String>)> {
        self.collect(|e| match e {
            UiEvent::Present { name, version } => Some((name.clone(), version.clone())),
            _ => None,
        })
    }

    /// Tools reported missing.
    pub fn missing(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Missing(name) => Some(name.clone()),
            _ => None,
        })
    }

    /// Methods announced, as `(tool, method)`.
    pub fn methods_started(&self) -> Vec<(String, String)> {
        self.collect(|e| match e {
            UiEvent::MethodStarted { tool, method } => Some((tool.clone(), method.clone())),
            _ => None,
        })
    }

    /// Successful installs, as `(tool, method)`.
    pub fn installed(&self) -> Vec<(String, String)> {
        self.collect(|e| match e {
            UiEvent::Installed { tool, method } => Some((tool.clone(), method.clone())),
            _ => None,
        })
    }

    /// Tool failures, as `(tool, reason)`.
    pub fn failures(&self) -> Vec<(String, String)> {
        self.collect(|e| match e {
            UiEvent::Failed { tool, reason } => Some((tool.clone(), reason.clone())),
            _ => None,
        })
    }

    /// Surfaced command output lines.
    pub fn output_lines(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Output(line) => Some(line.clone()),
            _ => None,
        })
    }

    /// Error messages.
    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    /// Warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    /// Summaries shown, as `(done, total, label)`.
    pub fn summaries(&self) -> Vec<(usize, usize, String)> {
        self.collect(|e| match e {
            UiEvent::Summary { done, total, label } => Some((*done, *total, label.clone())),
            _ => None,
        })
    }

    /// Messages spinners were started with.
    pub fn spinners(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::SpinnerStarted(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    /// Number of spinners started.
    pub fn spinner_starts(&self) -> usize {
        self.spinners().len()
    }

    /// Number of spinners stopped.
    pub fn spinner_stops(&self) -> usize {
        self.collect(|e| matches!(e, UiEvent::SpinnerStopped).then_some(()))
            .len()
    }

    /// Whether any line was printed while a spinner was running.
    pub fn output_while_spinning(&self) -> bool {
        let mut running = 0usize;
        for event in self.events.borrow().iter() {
            match event {
                UiEvent::SpinnerStarted(_) => running += 1,
                UiEvent::SpinnerStopped => running = running.saturating_sub(1),
                _ if running > 0 => return true,
                _ => {}
            }
        }
        false
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn tool_present(&mut self, name: &str, version: Option<&str>) {
        self.record(UiEvent::Present {
            name: name.to_string(),
            version: version.map(str::to_string),
        });
    }

    fn tool_missing(&mut self, name: &str) {
        self.record(UiEvent::Missing(name.to_string()));
    }

    fn method_started(&mut self, tool: &str, method: &str) {
        self.record(UiEvent::MethodStarted {
            tool: tool.to_string(),
            method: method.to_string(),
        });
    }

    fn tool_installed(&mut self, tool: &str, method: &str) {
        self.record(UiEvent::Installed {
            tool: tool.to_string(),
            method: method.to_string(),
        });
    }

    fn tool_failed(&mut self, tool: &str, reason: &str) {
        self.record(UiEvent::Failed {
            tool: tool.to_string(),
            reason: reason.to_string(),
        });
    }

    fn command_output(&mut self, line: &str) {
        self.record(UiEvent::Output(line.to_string()));
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            events: Rc::clone(&self.events),
            stopped: false,
        })
    }

    fn show_summary(&mut self, done: usize, total: usize, label: &str) {
        self.record(UiEvent::Summary {
            done,
            total,
            label: label.to_string(),
        });
    }
}

/// Mock spinner handle that records into its `MockUI`'s event log.
#[derive(Debug)]
pub struct MockSpinner {
    events: EventLog,
    stopped: bool,
}

impl SpinnerHandle for MockSpinner {
    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.events.borrow_mut().push(UiEvent::SpinnerStopped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_status_lines_in_order() {
        let mut ui = MockUI::new();
        ui.show_header("System Tools Check");
        ui.tool_present("go", Some("1.23.3"));
        ui.tool_missing("nmap");
        ui.show_summary(1, 2, "installed");

        assert_eq!(
            ui.events(),
            vec![
                UiEvent::Header("System Tools Check".to_string()),
                UiEvent::Present {
                    name: "go".to_string(),
                    version: Some("1.23.3".to_string()),
                },
                UiEvent::Missing("nmap".to_string()),
                UiEvent::Summary {
                    done: 1,
                    total: 2,
                    label: "installed".to_string(),
                },
            ]
        );
    }

    #[test]
    fn spinner_stop_is_recorded_once() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("working");
        spinner.stop();
        spinner.stop();
        assert_eq!(ui.spinner_starts(), 1);
        assert_eq!(ui.spinner_stops(), 1);
    }

    #[test]
    fn detects_output_while_spinning() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("working");
        ui.command_output("go: downloading x");
        spinner.stop();
        assert!(ui.output_while_spinning());
    }

    #[test]
    fn output_after_stop_is_not_while_spinning() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("working");
        spinner.stop();
        ui.command_output("go: downloading x");
        assert!(!ui.output_while_spinning());
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn collects_failures_and_installs() {
        let mut ui = MockUI::new();
        ui.method_started("go", "binary");
        ui.tool_installed("go", "binary");
        ui.tool_failed("nuclei", "boom");
        ui.error("Failed to install nuclei: exit status 1");

        assert_eq!(
            ui.methods_started(),
            vec![("go".to_string(), "binary".to_string())]
        );
        assert_eq!(ui.installed(), vec![("go".to_string(), "binary".to_string())]);
        assert_eq!(ui.failures(), vec![("nuclei".to_string(), "boom".to_string())]);
        assert_eq!(ui.errors().len(), 1);
    }
}
