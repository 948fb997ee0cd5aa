//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and owns the settings shared by
//! all of them (catalog path, color choice).

pub mod check;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
