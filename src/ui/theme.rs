//! Visual theme and styling.

use console::Style;

/// Spinner glyphs, one per tick.
pub const SPINNER_GLYPHS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// The installer's visual theme.
///
/// The theme is passed to every renderer instead of being read from
/// globals, so output can be switched to plain text for pipes and tests.
#[derive(Debug, Clone)]
pub struct InstallerTheme {
    /// Style for the box-drawing frame (blue).
    pub border: Style,
    /// Style for headers (blue bold).
    pub header: Style,
    /// Style for present/installed tools (green).
    pub success: Style,
    /// Style for missing tools and failures (red).
    pub error: Style,
    /// Style for in-progress narration and the spinner (yellow).
    pub pending: Style,
    /// Style for surfaced command output (gray).
    pub dim: Style,
    /// Whether styles emit ANSI codes.
    colored: bool,
}

impl Default for InstallerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallerTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            border: Style::new().blue(),
            header: Style::new().blue().bold(),
            success: Style::new().green(),
            error: Style::new().red(),
            pending: Style::new().yellow(),
            dim: Style::new().white().dim(),
            colored: true,
        }
        .forced()
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            border: Style::new(),
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            pending: Style::new(),
            dim: Style::new(),
            colored: false,
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Whether this theme emits ANSI codes.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    // The decision to color is made once when the theme is chosen
    fn forced(mut self) -> Self {
        for style in [
            &mut self.border,
            &mut self.header,
            &mut self.success,
            &mut self.error,
            &mut self.pending,
            &mut self.dim,
        ] {
            *style = style.clone().force_styling(true);
        }
        self
    }

    /// indicatif template for the spinner line.
    pub fn spinner_template(&self) -> &'static str {
        if self.colored {
            "{prefix:.blue}{spinner:.yellow} {msg}"
        } else {
            "{prefix}{spinner} {msg}"
        }
    }

    /// Frame prefix for a body line.
    pub fn frame(&self) -> String {
        format!("{}", self.border.apply_to("│"))
    }

    /// Format the run header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("╭─── {} ───╮", title)))
    }

    /// Format a present tool line, with its version if known.
    pub fn format_present(&self, name: &str, version: Option<&str>) -> String {
        let detail = match version {
            Some(v) => v.to_string(),
            None => "Installed (version unknown)".to_string(),
        };
        format!(
            "{} {} │ {}",
            self.frame(),
            self.success.apply_to(format!("✓ {:<9}", name)),
            detail
        )
    }

    /// Format a missing tool line.
    pub fn format_missing(&self, name: &str) -> String {
        format!(
            "{} {} │ Not installed",
            self.frame(),
            self.error.apply_to(format!("✗ {:<9}", name))
        )
    }

    /// Format the start of an installation method.
    pub fn format_method(&self, tool: &str, method: &str) -> String {
        format!(
            "{} {}",
            self.frame(),
            self.pending
                .apply_to(format!("📦 Installing {} using {} method...", tool, method))
        )
    }

    /// Format a successful installation.
    pub fn format_installed(&self, tool: &str, method: &str) -> String {
        format!(
            "{} {}",
            self.frame(),
            self.success
                .apply_to(format!("✓ Installed {} via {}", tool, method))
        )
    }

    /// Format the final failure of a tool after every method was tried.
    pub fn format_tool_failed(&self, tool: &str, reason: &str) -> String {
        format!(
            "{} {}",
            self.frame(),
            self.error
                .apply_to(format!("Failed to install {}: {}", tool, reason))
        )
    }

    /// Format a surfaced command output line.
    pub fn format_output(&self, line: &str) -> String {
        format!("{} {}", self.frame(), self.dim.apply_to(line))
    }

    /// Format a failure line.
    pub fn format_failure(&self, msg: &str) -> String {
        format!("{} {}", self.frame(), self.error.apply_to(format!("❌ {}", msg)))
    }

    /// Format a plain warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.frame(), self.pending.apply_to(msg))
    }

    /// Format the closing summary line.
    pub fn format_summary(&self, done: usize, total: usize, label: &str) -> String {
        format!(
            "{} {} {}",
            self.border.apply_to("╰───"),
            self.success
                .apply_to(format!("{}/{} tools {}", done, total, label)),
            self.border.apply_to("───╯")
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycle_has_ten_glyphs() {
        assert_eq!(SPINNER_GLYPHS.chars().count(), 10);
    }

    #[test]
    fn plain_theme_has_no_escape_codes() {
        let theme = InstallerTheme::plain();
        let line = theme.format_missing("nmap");
        assert!(!line.contains('\u{1b}'));
        assert!(!theme.is_colored());
    }

    #[test]
    fn colored_theme_emits_escape_codes() {
        let theme = InstallerTheme::new();
        assert!(theme.format_missing("nmap").contains('\u{1b}'));
        assert!(theme.is_colored());
    }

    #[test]
    fn formats_present_with_version() {
        let theme = InstallerTheme::plain();
        assert_eq!(
            theme.format_present("go", Some("1.23.3")),
            "│ ✓ go        │ 1.23.3"
        );
    }

    #[test]
    fn formats_present_without_version() {
        let theme = InstallerTheme::plain();
        let line = theme.format_present("jq", None);
        assert!(line.contains("Installed (version unknown)"));
    }

    #[test]
    fn formats_missing() {
        let theme = InstallerTheme::plain();
        assert_eq!(theme.format_missing("amass"), "│ ✗ amass     │ Not installed");
    }

    #[test]
    fn formats_method() {
        let theme = InstallerTheme::plain();
        let line = theme.format_method("go", "binary");
        assert!(line.contains("Installing go using binary method..."));
    }

    #[test]
    fn formats_failure() {
        let theme = InstallerTheme::plain();
        let line = theme.format_failure("Failed to install go: exit status 1");
        assert!(line.contains("❌"));
        assert!(line.contains("exit status 1"));
    }

    #[test]
    fn formats_tool_failed() {
        let theme = InstallerTheme::plain();
        assert_eq!(
            theme.format_tool_failed("nuclei", "all installation methods failed for nuclei"),
            "│ Failed to install nuclei: all installation methods failed for nuclei"
        );
    }

    #[test]
    fn formats_summary() {
        let theme = InstallerTheme::plain();
        assert_eq!(
            theme.format_summary(3, 4, "installed"),
            "╰─── 3/4 tools installed ───╯"
        );
    }

    #[test]
    fn formats_header() {
        let theme = InstallerTheme::plain();
        assert_eq!(
            theme.format_header("System Tools Check"),
            "╭─── System Tools Check ───╮"
        );
    }

    #[test]
    fn spinner_template_matches_coloring() {
        assert!(InstallerTheme::new().spinner_template().contains(".yellow"));
        assert!(!InstallerTheme::plain().spinner_template().contains(".yellow"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = InstallerTheme::default();
        let new = InstallerTheme::new();
        assert_eq!(default.format_missing("x"), new.format_missing("x"));
    }
}
