//! devtools-installer CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devtools_installer::cli::{Cli, CommandDispatcher};
use devtools_installer::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never interleave with the spinner line.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devtools_installer=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("devtools_installer=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devtools-installer starting with args: {:?}", cli);

    let mut ui = TerminalUI::detect(cli.output_mode(), cli.no_color);
    let dispatcher = CommandDispatcher::from_cli(&cli);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_status()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
