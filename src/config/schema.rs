//! Catalog schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `installer.yaml` file format.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Name of the catalog entry that may serve as a fallback for unlisted tools.
pub const DEFAULT_TOOL: &str = "default";

/// Root configuration structure for installer.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCatalog {
    /// Tool names to process, in order
    pub tool_list: Vec<String>,

    /// Per-tool metadata
    #[serde(deserialize_with = "tools_allowing_empty_entries")]
    pub tools: HashMap<String, ToolSpec>,

    /// Global settings
    pub settings: Settings,
}

impl ToolCatalog {
    /// Look up the explicit catalog entry for a tool.
    pub fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// Look up the entry for a tool, falling back to the `default` entry
    /// when enabled and the tool has none of its own.
    pub fn resolve(&self, name: &str, use_default_fallback: bool) -> Option<&ToolSpec> {
        match self.tools.get(name) {
            Some(spec) => Some(spec),
            None if use_default_fallback => self.tools.get(DEFAULT_TOOL),
            None => None,
        }
    }
}

/// Metadata for a single tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSpec {
    /// Other tools this one relies on (informational only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Fixed version, reported verbatim and substituted for `${version}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Single flag used to query the version instead of the built-in list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_flag: Option<String>,

    /// Installation methods in priority order
    pub methods: Vec<InstallMethod>,
}

impl ToolSpec {
    /// The declared fixed version, ignoring empty strings.
    pub fn fixed_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// The declared version flag override, ignoring empty strings.
    pub fn version_flag(&self) -> Option<&str> {
        self.version_flag.as_deref().filter(|f| !f.is_empty())
    }

    /// Check whether any installation method is declared.
    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}

/// One strategy for installing a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallMethod {
    /// Label used in progress narration
    pub name: String,

    /// Command line templates, run in order
    pub commands: Vec<String>,
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-command timeout in seconds (no timeout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout: Option<u64>,

    /// Apply the `default` entry to listed tools without their own entry
    #[serde(skip_serializing_if = "is_false")]
    pub use_default_fallback: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Accept `tool:` entries with an empty body as specs without methods.
fn tools_allowing_empty_entries<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, ToolSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<ToolSpec>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, spec)| (name, spec.unwrap_or_default()))
        .collect())
}
