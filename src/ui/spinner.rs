//! Progress spinners.
//!
//! A [`ProgressIndicator`] repaints one status line with a rotating glyph
//! and a message every 80ms on indicatif's ticker thread. [`stop`] joins
//! that thread before clearing the line, so once it returns nothing else
//! will be written by this indicator.
//!
//! Indicators are cheap. To print a line while a command is running, stop
//! the current one, print, and start a fresh indicator.
//!
//! [`stop`]: SpinnerHandle::stop

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::theme::{InstallerTheme, SPINNER_GLYPHS};
use super::SpinnerHandle;

/// Repaint interval of the spinner line.
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// A status line spinner for a running command.
pub struct ProgressIndicator {
    bar: ProgressBar,
    stopped: bool,
}

impl ProgressIndicator {
    /// Start a spinner on stdout.
    pub fn start(message: &str, theme: &InstallerTheme) -> Self {
        Self::start_with_target(message, theme, ProgressDrawTarget::stdout())
    }

    /// Start a spinner drawing to a specific target.
    pub fn start_with_target(
        message: &str,
        theme: &InstallerTheme,
        target: ProgressDrawTarget,
    ) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::with_template(theme.spinner_template())
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(&tick_chars());
        bar.set_style(style);
        bar.set_prefix("│ ");
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);

        Self {
            bar,
            stopped: false,
        }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            stopped: false,
        }
    }

    /// Whether the render loop is still running.
    pub fn is_running(&self) -> bool {
        !self.stopped
    }
}

/// Glyph cycle plus the final frame indicatif shows once finished.
fn tick_chars() -> String {
    let mut chars = SPINNER_GLYPHS.to_string();
    chars.push(' ');
    chars
}

impl SpinnerHandle for ProgressIndicator {
    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        // Joins the ticker thread, then blanks the line
        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}
