//! Tool presence and version detection.
//!
//! A tool is present when an executable of that name resolves on the search
//! path. Absence is not an error: it is what triggers installation.
//!
//! For present tools the version comes from the catalog when declared there,
//! otherwise from probing the executable with common version flags.

use std::path::{Path, PathBuf};

use crate::config::ToolCatalog;
use crate::shell::CommandRunner;

use super::path::{parse_system_path, resolve_tool_path};
use super::types::DetectionResult;
use super::version::extract_version;

/// Flags tried, in order, to query a tool's version.
pub const DEFAULT_VERSION_FLAGS: &[&str] = &[
    "--version", // Most common
    "-version",  // subfinder and friends
    "version",   // go, amass
    "-v",
    "-V",
    "--ver",
    "-ver",
];

/// Detects tools listed in a catalog.
pub struct ToolDetector<'a> {
    catalog: &'a ToolCatalog,
    runner: &'a dyn CommandRunner,
    search_path: Vec<PathBuf>,
}

impl<'a> ToolDetector<'a> {
    /// Create a detector over the process's PATH.
    pub fn new(catalog: &'a ToolCatalog, runner: &'a dyn CommandRunner) -> Self {
        Self::with_search_path(catalog, runner, parse_system_path())
    }

    /// Create a detector over an explicit list of directories.
    pub fn with_search_path(
        catalog: &'a ToolCatalog,
        runner: &'a dyn CommandRunner,
        search_path: Vec<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            runner,
            search_path,
        }
    }

    /// Check whether a tool is present and, if so, report its version.
    pub fn detect(&self, name: &str) -> DetectionResult {
        let Some(path) = resolve_tool_path(name, &self.search_path) else {
            tracing::debug!("'{}' not found on search path", name);
            return DetectionResult::not_found(name);
        };

        tracing::debug!("'{}' resolved to {}", name, path.display());
        let result = DetectionResult::found(name, &path);
        match self.version_of(name, &path) {
            Some(version) => result.with_version(&version),
            None => result,
        }
    }

    /// Determine the display version of a present tool.
    fn version_of(&self, name: &str, path: &Path) -> Option<String> {
        let spec = self.catalog.spec(name);

        if let Some(version) = spec.and_then(|s| s.fixed_version()) {
            return Some(version.to_string());
        }

        let flags: Vec<&str> = match spec.and_then(|s| s.version_flag()) {
            Some(flag) => vec![flag],
            None => DEFAULT_VERSION_FLAGS.to_vec(),
        };

        let program = path.to_string_lossy();
        for flag in flags {
            let result = match self.runner.capture(&program, &[flag.to_string()]) {
                Ok(result) if result.success => result,
                Ok(result) => {
                    tracing::trace!(
                        "'{} {}' exited with {:?}",
                        name,
                        flag,
                        result.exit_code
                    );
                    continue;
                }
                Err(e) => {
                    tracing::trace!("'{} {}' failed to run: {}", name, flag, e);
                    continue;
                }
            };

            let version = extract_version(&result.output);
            if !version.is_empty() {
                tracing::debug!("'{}' reports version '{}' via {}", name, version, flag);
                return Some(version);
            }
        }

        None
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::config::ToolSpec;
    use crate::shell::{MockOutcome, MockRunner};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn bin_dir(tools: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for tool in tools {
            let path = dir.path().join(tool);
            fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        dir
    }

    fn program(dir: &TempDir, tool: &str) -> String {
        dir.path().join(tool).to_string_lossy().into_owned()
    }

    #[test]
    fn missing_tool_is_not_present_and_never_invoked() {
        let dir = bin_dir(&[]);
        let catalog = ToolCatalog::default();
        let runner = MockRunner::new();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("nuclei");
        assert!(!result.is_present());
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn fixed_version_is_returned_without_invoking_tool() {
        let dir = bin_dir(&["go"]);
        let mut catalog = ToolCatalog::default();
        catalog.tools.insert(
            "go".to_string(),
            ToolSpec {
                version: Some("1.23.3".to_string()),
                ..Default::default()
            },
        );
        let runner = MockRunner::new();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("go");
        assert!(result.is_present());
        assert_eq!(result.version.as_deref(), Some("1.23.3"));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn tries_default_flags_in_order_until_one_succeeds() {
        let dir = bin_dir(&["subfinder"]);
        let bin = program(&dir, "subfinder");
        let runner = MockRunner::new()
            .on(&format!("{} --version", bin), MockOutcome::exit(2))
            .on(
                &format!("{} -version", bin),
                MockOutcome::output(&["[INF] Current Version: v2.6.3"]),
            );
        let catalog = ToolCatalog::default();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("subfinder");
        assert_eq!(result.version.as_deref(), Some("v2.6.3"));
        assert_eq!(
            runner.command_lines(),
            vec![format!("{} --version", bin), format!("{} -version", bin)]
        );
    }

    #[test]
    fn version_flag_override_is_the_only_flag_tried() {
        let dir = bin_dir(&["amass"]);
        let bin = program(&dir, "amass");
        let mut catalog = ToolCatalog::default();
        catalog.tools.insert(
            "amass".to_string(),
            ToolSpec {
                version_flag: Some("-version".to_string()),
                ..Default::default()
            },
        );
        let runner = MockRunner::new().on(&bin, MockOutcome::exit(1));
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("amass");
        assert!(result.is_present());
        assert_eq!(result.version, None);
        assert_eq!(runner.command_lines(), vec![format!("{} -version", bin)]);
    }

    #[test]
    fn unknown_version_when_every_flag_fails() {
        let dir = bin_dir(&["mystery"]);
        let bin = program(&dir, "mystery");
        let runner = MockRunner::new().on(&bin, MockOutcome::exit(1));
        let catalog = ToolCatalog::default();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("mystery");
        assert!(result.is_present());
        assert_eq!(result.version, None);
        assert_eq!(runner.invocations().len(), DEFAULT_VERSION_FLAGS.len());
    }

    #[test]
    fn spawn_errors_move_to_next_flag() {
        let dir = bin_dir(&["httpx"]);
        let bin = program(&dir, "httpx");
        let runner = MockRunner::new()
            .on(&format!("{} --version", bin), MockOutcome::SpawnFailure)
            .on(
                &format!("{} -version", bin),
                MockOutcome::output(&["Current Version: v1.3.7"]),
            );
        let catalog = ToolCatalog::default();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        assert_eq!(detector.detect("httpx").version.as_deref(), Some("v1.3.7"));
    }

    #[test]
    fn empty_output_tries_next_flag() {
        let dir = bin_dir(&["jq"]);
        let bin = program(&dir, "jq");
        let runner = MockRunner::new()
            .on(&format!("{} --version", bin), MockOutcome::success())
            .on(&format!("{} -version", bin), MockOutcome::exit(2))
            .on(&format!("{} version", bin), MockOutcome::exit(2))
            .on(&format!("{} -v", bin), MockOutcome::output(&["jq-1.7.1"]));
        let catalog = ToolCatalog::default();
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        assert_eq!(detector.detect("jq").version.as_deref(), Some("1.7.1"));
    }

    #[test]
    fn real_executable_on_search_path_is_detected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake-tool");
        fs::write(&path, "#!/bin/sh\necho \"fake-tool version v0.4.2\"\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let catalog = ToolCatalog::default();
        let runner = crate::shell::SystemRunner;
        let detector =
            ToolDetector::with_search_path(&catalog, &runner, vec![dir.path().to_path_buf()]);

        let result = detector.detect("fake-tool");
        assert_eq!(result.path, Some(path));
        assert_eq!(result.version.as_deref(), Some("v0.4.2"));
    }
}
