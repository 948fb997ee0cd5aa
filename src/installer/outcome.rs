//! Per-tool outcomes and run summaries.

use std::time::Duration;

use crate::error::InstallerError;

/// What happened to one tool during a run.
#[derive(Debug)]
pub enum ToolOutcome {
    /// The tool was already on the search path.
    AlreadyPresent {
        /// Display version, if one could be determined.
        version: Option<String>,
    },
    /// The tool was missing and a method installed it.
    Installed {
        /// Name of the method that succeeded.
        method: String,
    },
    /// The tool was missing and was not installed (check runs).
    Missing,
    /// The tool was missing and could not be installed.
    Failed {
        /// Why installation failed.
        error: InstallerError,
    },
}

impl ToolOutcome {
    /// Whether the tool ended the run available.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::AlreadyPresent { .. } | Self::Installed { .. })
    }
}

/// Outcome of one tool, by name.
#[derive(Debug)]
pub struct ToolReport {
    /// Tool name as listed in the catalog.
    pub name: String,
    /// What happened.
    pub outcome: ToolOutcome,
}

/// Result of a pass over the catalog's tool list.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Reports in `tool_list` order.
    pub tools: Vec<ToolReport>,
    /// Wall-clock time of the pass.
    pub duration: Duration,
}

impl RunSummary {
    /// Add a tool's outcome.
    pub fn record(&mut self, name: &str, outcome: ToolOutcome) {
        self.tools.push(ToolReport {
            name: name.to_string(),
            outcome,
        });
    }

    /// Tools present before the run or installed by it.
    pub fn installed(&self) -> usize {
        self.tools.iter().filter(|t| t.outcome.is_available()).count()
    }

    /// Number of tools processed.
    pub fn total(&self) -> usize {
        self.tools.len()
    }

    /// Whether every tool ended the run available.
    pub fn all_available(&self) -> bool {
        self.installed() == self.total()
    }

    /// Reports for tools that did not end the run available.
    pub fn unavailable(&self) -> impl Iterator<Item = &ToolReport> {
        self.tools.iter().filter(|t| !t.outcome.is_available())
    }

    /// The report for a tool, if it was processed.
    pub fn get(&self, name: &str) -> Option<&ToolOutcome> {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.outcome)
    }
}
