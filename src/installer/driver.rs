//! The detect/install loop.
//!
//! Tools are processed one at a time in `tool_list` order. A present tool
//! is reported and left alone. A missing tool has its methods tried in
//! declared order; a method succeeds only when every one of its commands
//! exits zero, and the first failing command abandons the method. Per-tool
//! failures are rendered and never abort the pass.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{
    expand_command, InstallMethod, Settings, ToolCatalog, ToolSpec, DEFAULT_TOOL,
};
use crate::detection::{DetectionResult, ToolDetector};
use crate::error::{InstallerError, Result};
use crate::shell::{CommandLine, CommandOptions, CommandRunner};
use crate::ui::{OutputMode, UserInterface};

use super::outcome::{RunSummary, ToolOutcome};

/// Banner shown at the start of every pass.
pub const RUN_HEADER: &str = "System Tools Check";

/// Template fragments marking a package-fetch step whose download lines
/// are worth surfacing.
const FETCH_MARKERS: &[&str] = &["go install", "go get"];

/// Substring of fetch output lines that are surfaced.
const SURFACED_MARKER: &str = "downloading";

/// Options controlling an install pass.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Kill any single command running longer than this.
    pub timeout: Option<Duration>,
    /// Use the `default` entry for listed tools without their own entry.
    pub use_default_fallback: bool,
}

impl InstallOptions {
    /// Options taken from the catalog's `settings` block.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timeout: settings.command_timeout.map(Duration::from_secs),
            use_default_fallback: settings.use_default_fallback,
        }
    }
}

/// Drives detection and installation over a catalog.
pub struct Installer<'a> {
    catalog: &'a ToolCatalog,
    runner: &'a dyn CommandRunner,
    detector: ToolDetector<'a>,
    options: InstallOptions,
}

impl<'a> Installer<'a> {
    /// Create an installer that searches the process's PATH.
    pub fn new(
        catalog: &'a ToolCatalog,
        runner: &'a dyn CommandRunner,
        options: InstallOptions,
    ) -> Self {
        Self {
            catalog,
            runner,
            detector: ToolDetector::new(catalog, runner),
            options,
        }
    }

    /// Create an installer over an explicit list of directories.
    pub fn with_search_path(
        catalog: &'a ToolCatalog,
        runner: &'a dyn CommandRunner,
        options: InstallOptions,
        search_path: Vec<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            runner,
            detector: ToolDetector::with_search_path(catalog, runner, search_path),
            options,
        }
    }

    /// Detect every listed tool and install the missing ones.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunSummary {
        let start = Instant::now();
        let mut summary = RunSummary::default();
        ui.show_header(RUN_HEADER);

        for name in &self.catalog.tool_list {
            let detection = self.detector.detect(name);
            if report_detection(&detection, ui) {
                summary.record(
                    name,
                    ToolOutcome::AlreadyPresent {
                        version: detection.version,
                    },
                );
                continue;
            }

            let outcome = match self.install_tool(name, ui) {
                Ok(method) => {
                    info!("Installed '{}' via '{}'", name, method);
                    ui.tool_installed(name, &method);
                    ToolOutcome::Installed { method }
                }
                Err(error) => {
                    warn!("Could not install '{}': {}", name, error);
                    ui.tool_failed(name, &error.to_string());
                    ToolOutcome::Failed { error }
                }
            };
            summary.record(name, outcome);
        }

        summary.duration = start.elapsed();
        ui.show_summary(summary.installed(), summary.total(), "installed");
        summary
    }

    /// Detect every listed tool without installing anything.
    pub fn check(&self, ui: &mut dyn UserInterface) -> RunSummary {
        let start = Instant::now();
        let mut summary = RunSummary::default();
        ui.show_header(RUN_HEADER);

        for name in &self.catalog.tool_list {
            let detection = self.detector.detect(name);
            let outcome = if report_detection(&detection, ui) {
                ToolOutcome::AlreadyPresent {
                    version: detection.version,
                }
            } else {
                ToolOutcome::Missing
            };
            summary.record(name, outcome);
        }

        summary.duration = start.elapsed();
        ui.show_summary(summary.installed(), summary.total(), "present");
        summary
    }

    /// Try each method in order. Returns the name of the one that worked.
    fn install_tool(&self, name: &str, ui: &mut dyn UserInterface) -> Result<String> {
        let spec = self
            .catalog
            .resolve(name, self.options.use_default_fallback)
            .filter(|spec| spec.has_methods())
            .ok_or_else(|| InstallerError::NoInstallMethods {
                tool: name.to_string(),
            })?;

        if self.catalog.spec(name).is_none() {
            ui.warning(&format!(
                "No catalog entry for {}, using the {} entry",
                name, DEFAULT_TOOL
            ));
        }
        if !spec.dependencies.is_empty() {
            debug!(
                "'{}' declares dependencies {:?} (not enforced)",
                name, spec.dependencies
            );
        }

        for method in &spec.methods {
            ui.method_started(name, &method.name);
            match self.run_method(name, spec, method, ui) {
                Ok(()) => return Ok(method.name.clone()),
                Err(e) => {
                    debug!("Method '{}' for '{}' failed: {}", method.name, name, e);
                    ui.error(&format!("Failed to install {}: {}", name, e));
                }
            }
        }

        Err(InstallerError::AllMethodsFailed {
            tool: name.to_string(),
        })
    }

    /// Run every command of a method, stopping at the first failure.
    fn run_method(
        &self,
        name: &str,
        spec: &ToolSpec,
        method: &InstallMethod,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        for template in &method.commands {
            self.run_command(name, &method.name, template, spec.fixed_version(), ui)?;
        }
        Ok(())
    }

    fn run_command(
        &self,
        name: &str,
        method: &str,
        template: &str,
        version: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let expanded = expand_command(template, version);
        let Some(command) = CommandLine::parse(&expanded) else {
            debug!("Template '{}' expanded to a blank line, skipping", template);
            return Ok(());
        };
        debug!("Running '{}'", command);

        let label = format!(
            "Installing {} ({}): {}",
            name,
            method,
            command.program_basename()
        );
        let fetch = is_fetch_command(template);
        let mode = ui.output_mode();
        let options = CommandOptions {
            timeout: self.options.timeout,
        };

        let mut spinner = ui.start_spinner(&label);
        let result = {
            let mut on_line = |line: &str| {
                if surfaces_line(mode, fetch, line) {
                    spinner.stop();
                    ui.command_output(line.trim());
                    spinner = ui.start_spinner(&label);
                }
            };
            self.runner.stream(&command, &options, &mut on_line)
        };
        spinner.stop();

        let result = result?;
        if result.success {
            debug!("'{}' finished in {:?}", command, result.duration);
            Ok(())
        } else {
            Err(InstallerError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}

/// Print the present/missing line. Returns whether the tool is present.
fn report_detection(detection: &DetectionResult, ui: &mut dyn UserInterface) -> bool {
    if detection.is_present() {
        ui.tool_present(&detection.name, detection.version.as_deref());
        true
    } else {
        ui.tool_missing(&detection.name);
        false
    }
}

/// Whether a command template is a package-fetch step.
fn is_fetch_command(template: &str) -> bool {
    FETCH_MARKERS.iter().any(|m| template.contains(m))
}

/// Whether an output line should interrupt the spinner and be printed.
fn surfaces_line(mode: OutputMode, fetch: bool, line: &str) -> bool {
    if mode.shows_command_output() {
        return true;
    }
    mode.shows_narration() && fetch && line.contains(SURFACED_MARKER)
}
