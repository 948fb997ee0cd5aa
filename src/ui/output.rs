//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Surface every line of installation command output.
    Verbose,
    /// Spinners, narration, and package download lines only.
    #[default]
    Normal,
    /// Status lines, the summary, and listings; no spinners or method narration.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows all command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode narrates installation methods.
    pub fn shows_narration(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
