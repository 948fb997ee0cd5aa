//! Version extraction from free-form command output.
//!
//! Tools print their version in many shapes (`v1.2.3`, `go1.23.3`,
//! `amass - v4.5.6`, banners with several numbers). [`extract_version`]
//! runs an ordered list of matchers and returns the first hit. The order
//! is part of the contract: more specific matchers come before the generic
//! ones that would otherwise shadow them.
//!
//! The result is display text, not a parsed version. When nothing matches
//! the first line of the output is returned as-is.

use regex::Regex;
use std::sync::LazyLock;

// --- Compiled regexes (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_VERSION_WORD, r"(?i)version\s+(v\d+\.\d+\.\d+)");
lazy_regex!(RE_AMASS, r"(?i)amass\s+-\s+v(\d+\.\d+\.\d+)");
lazy_regex!(RE_V_SEMVER, r"v\d+\.\d+\.\d+");
lazy_regex!(RE_SEMVER, r"\d+\.\d+\.\d+");
lazy_regex!(RE_GO, r"go(\d+\.\d+\.\d+)");
lazy_regex!(RE_VERSION_LABEL, r"Version: (v\d+\.\d+\.\d+)");

/// A single named version matcher.
pub struct VersionMatcher {
    /// Matcher name (for debugging and ordering tests).
    pub name: &'static str,
    /// Returns the normalized version if the text matches.
    pub extract: fn(&str) -> Option<String>,
}

fn first_group(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn whole_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

fn version_word(text: &str) -> Option<String> {
    first_group(&RE_VERSION_WORD, text)
}

fn amass(text: &str) -> Option<String> {
    first_group(&RE_AMASS, text)
}

fn v_semver(text: &str) -> Option<String> {
    whole_match(&RE_V_SEMVER, text)
}

fn semver(text: &str) -> Option<String> {
    whole_match(&RE_SEMVER, text)
}

fn go_release(text: &str) -> Option<String> {
    first_group(&RE_GO, text)
}

fn version_label(text: &str) -> Option<String> {
    first_group(&RE_VERSION_LABEL, text)
}

/// Matchers in priority order. The first one that matches wins.
pub const VERSION_MATCHERS: &[VersionMatcher] = &[
    VersionMatcher {
        name: "version-word",
        extract: version_word,
    },
    VersionMatcher {
        name: "amass",
        extract: amass,
    },
    VersionMatcher {
        name: "v-semver",
        extract: v_semver,
    },
    VersionMatcher {
        name: "semver",
        extract: semver,
    },
    VersionMatcher {
        name: "go",
        extract: go_release,
    },
    VersionMatcher {
        name: "version-label",
        extract: version_label,
    },
];

/// Extract a display version from command output.
///
/// Returns an empty string only when the trimmed output is empty or its
/// first line is.
pub fn extract_version(output: &str) -> String {
    let text = output.trim();

    for matcher in VERSION_MATCHERS {
        if let Some(version) = (matcher.extract)(text) {
            tracing::trace!("Version matcher '{}' matched: {}", matcher.name, version);
            return version;
        }
    }

    text.lines().next().unwrap_or_default().to_string()
}
