//! Mock command runner for testing.
//!
//! `MockRunner` implements the [`CommandRunner`] trait without spawning
//! anything. It records every invocation and answers with scripted
//! outcomes, so tests can assert exactly which commands ran.
//!
//! # Example
//!
//! ```
//! use devtools_installer::shell::{CommandLine, CommandOptions, CommandRunner, MockOutcome, MockRunner};
//!
//! let runner = MockRunner::new().on("wget", MockOutcome::exit(4));
//!
//! let cmd = CommandLine::parse("wget https://example.com/tool.tgz").unwrap();
//! let result = runner.stream(&cmd, &CommandOptions::default(), &mut |_| {}).unwrap();
//!
//! assert!(!result.success);
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{InstallerError, Result};

use super::command::{CommandLine, CommandOptions, CommandResult, CommandRunner};

/// A scripted response for a mocked command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// The program starts, prints `lines`, and exits with `code`.
    Exit { code: i32, lines: Vec<String> },
    /// The program cannot be started.
    SpawnFailure,
}

impl MockOutcome {
    /// Exit zero without output.
    pub fn success() -> Self {
        Self::Exit {
            code: 0,
            lines: Vec::new(),
        }
    }

    /// Exit with the given code without output.
    pub fn exit(code: i32) -> Self {
        Self::Exit {
            code,
            lines: Vec::new(),
        }
    }

    /// Exit zero after printing the given lines.
    pub fn output(lines: &[&str]) -> Self {
        Self::Exit {
            code: 0,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Recording [`CommandRunner`] with scripted outcomes.
///
/// Outcomes are looked up by the full command line first (e.g.
/// `"nmap --version"`), then by program name. Unscripted commands succeed
/// without output.
#[derive(Debug, Default)]
pub struct MockRunner {
    outcomes: HashMap<String, MockOutcome>,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for a program name or full command line.
    pub fn on(mut self, key: &str, outcome: MockOutcome) -> Self {
        self.outcomes.insert(key.to_string(), outcome);
        self
    }

    /// Every invocation so far, as argv vectors, in call order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Invocations joined back into command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|argv| argv.join(" "))
            .collect()
    }

    /// Check whether any invocation used this program.
    pub fn was_invoked(&self, program: &str) -> bool {
        self.invocations()
            .iter()
            .any(|argv| argv.first().map(String::as_str) == Some(program))
    }

    fn respond(&self, argv: Vec<String>) -> Result<(i32, Vec<String>)> {
        let line = argv.join(" ");
        let program = argv.first().cloned().unwrap_or_default();
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(argv);
        }

        let outcome = self
            .outcomes
            .get(&line)
            .or_else(|| self.outcomes.get(&program))
            .cloned()
            .unwrap_or_else(MockOutcome::success);

        match outcome {
            MockOutcome::Exit { code, lines } => Ok((code, lines)),
            MockOutcome::SpawnFailure => Err(InstallerError::SpawnFailed {
                program,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mocked spawn failure"),
            }),
        }
    }
}

fn to_result(code: i32, lines: &[String]) -> CommandResult {
    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    if code == 0 {
        CommandResult::success(output, Duration::ZERO)
    } else {
        CommandResult::failure(Some(code), output, Duration::ZERO)
    }
}

impl CommandRunner for MockRunner {
    fn capture(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        let argv = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect();
        let (code, lines) = self.respond(argv)?;
        Ok(to_result(code, &lines))
    }

    fn stream(
        &self,
        command: &CommandLine,
        _options: &CommandOptions,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult> {
        let (code, lines) = self.respond(command.argv())?;
        for line in &lines {
            on_line(line);
        }
        Ok(to_result(code, &lines))
    }
}
