//! Subprocess execution.

pub mod command;
pub mod mock;

pub use command::{
    execute_capture, execute_streaming, CommandLine, CommandOptions, CommandResult,
    CommandRunner, SystemRunner,
};
pub use mock::{MockOutcome, MockRunner};
