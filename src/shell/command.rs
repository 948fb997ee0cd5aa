//! Subprocess execution.
//!
//! Installation commands are not run through a shell: each substituted
//! command line is split on whitespace into a program and its arguments.
//! Arguments containing spaces therefore cannot be expressed.

use crate::error::{InstallerError, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// How often a child that has closed its pipes is checked for exit.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A command line split into a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and arguments.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Split a command line on whitespace.
    ///
    /// Returns `None` for a blank line. No quoting or escaping is honoured.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// The executable name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments after the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Final path component of the program, for display.
    pub fn program_basename(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program)
    }

    /// Program and arguments as one vector.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined standard output and standard error.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(output: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            output,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, output: String, duration: Duration) -> Self {
        Self {
            exit_code,
            output,
            duration,
            success: false,
        }
    }
}

/// Options for streamed command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the command after this long (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Runs external programs.
///
/// The installer talks to the operating system only through this trait,
/// which lets tests substitute [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run a program to completion and capture its combined output.
    fn capture(&self, program: &str, args: &[String]) -> Result<CommandResult>;

    /// Run a command, passing each line of merged stdout/stderr to `on_line`
    /// as it arrives.
    ///
    /// Returns only after the process has exited and all of its output has
    /// been delivered.
    fn stream(
        &self,
        command: &CommandLine,
        options: &CommandOptions,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        execute_capture(program, args)
    }

    fn stream(
        &self,
        command: &CommandLine,
        options: &CommandOptions,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult> {
        execute_streaming(command, options, on_line)
    }
}

/// Execute a program and collect its combined output without streaming.
pub fn execute_capture(program: &str, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| InstallerError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;

    let duration = start.elapsed();

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(CommandResult::success(combined, duration))
    } else {
        Ok(CommandResult::failure(output.status.code(), combined, duration))
    }
}

/// Execute a command with streaming, merged output.
pub fn execute_streaming(
    command: &CommandLine,
    options: &CommandOptions,
    on_line: &mut dyn FnMut(&str),
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut child = Command::new(command.program())
        .args(command.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| InstallerError::SpawnFailed {
            program: command.program().to_string(),
            source,
        })?;

    let (tx, rx) = mpsc::channel();
    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(spawn_line_reader(stdout, tx.clone()));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(spawn_line_reader(stderr, tx.clone()));
    }
    // Readers hold the only senders, so the channel closes at EOF on both pipes
    drop(tx);

    let deadline = options.timeout.map(|t| start + t);
    let mut output = String::new();
    let mut timed_out = false;

    loop {
        let received = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(remaining) {
                    Ok(line) => Some(line),
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        timed_out = true;
                        None
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => None,
                }
            }
            None => rx.recv().ok(),
        };

        let Some(line) = received else { break };
        output.push_str(&line);
        output.push('\n');
        on_line(&line);
    }

    // Both pipes closed, but the child may still be running
    if let (false, Some(deadline)) = (timed_out, deadline) {
        timed_out = outlives_deadline(&mut child, deadline)?;
    }

    if timed_out {
        tracing::warn!("Killing '{}' after timeout", command);
        let _ = child.kill();
        let _ = child.wait();
        // Readers may still be blocked on pipes inherited by grandchildren;
        // they are left to finish on their own.
        return Err(InstallerError::CommandTimedOut {
            command: command.to_string(),
            seconds: options.timeout.map(|t| t.as_secs()).unwrap_or_default(),
        });
    }

    for reader in readers {
        let _ = reader.join();
    }

    let status = child.wait()?;
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(output, duration))
    } else {
        Ok(CommandResult::failure(status.code(), output, duration))
    }
}

/// Poll the child until it exits. Returns whether the deadline passed first.
fn outlives_deadline(child: &mut Child, deadline: Instant) -> Result<bool> {
    loop {
        if child.try_wait()?.is_some() {
            return Ok(false);
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(true);
        }
        thread::sleep(remaining.min(EXIT_POLL_INTERVAL));
    }
}

fn spawn_line_reader<R>(pipe: R, tx: mpsc::Sender<String>) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(pipe);
        for line in reader.lines().map_while(std::result::Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    })
}
