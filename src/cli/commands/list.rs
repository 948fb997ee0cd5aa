//! List command implementation.
//!
//! `devtools-installer list` prints the catalog in `tool_list` order.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::{load_config, InstallMethod, ToolCatalog};
use crate::error::Result;
use crate::ui::theme::InstallerTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config_path: PathBuf,
    args: ListArgs,
    no_color: bool,
}

/// One listed tool, as printed by `list --json`.
#[derive(Debug, Serialize)]
pub struct ListedTool<'a> {
    pub name: &'a str,
    /// Whether the catalog has an entry for this tool.
    pub configured: bool,
    pub version: Option<&'a str>,
    pub version_flag: Option<&'a str>,
    pub dependencies: &'a [String],
    pub methods: &'a [InstallMethod],
}

/// Build the listing for every tool in `tool_list`.
pub fn listing(catalog: &ToolCatalog) -> Vec<ListedTool<'_>> {
    catalog
        .tool_list
        .iter()
        .map(|name| match catalog.spec(name) {
            Some(spec) => ListedTool {
                name,
                configured: true,
                version: spec.fixed_version(),
                version_flag: spec.version_flag(),
                dependencies: &spec.dependencies,
                methods: &spec.methods,
            },
            None => ListedTool {
                name,
                configured: false,
                version: None,
                version_flag: None,
                dependencies: &[],
                methods: &[],
            },
        })
        .collect()
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config_path: &Path, args: ListArgs, no_color: bool) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
            no_color,
        }
    }

    fn print_text(&self, tools: &[ListedTool<'_>], ui: &mut dyn UserInterface) {
        let theme = InstallerTheme::detect(self.no_color);

        for tool in tools {
            let detail = match tool.version {
                Some(version) => format!(" {}", theme.dim.apply_to(format!("({})", version))),
                None => String::new(),
            };
            ui.message(&format!("{}{}", theme.header.apply_to(tool.name), detail));

            if !tool.configured {
                ui.message(&format!(
                    "  {}",
                    theme.error.apply_to("no catalog entry")
                ));
                continue;
            }
            if let Some(flag) = tool.version_flag {
                ui.message(&format!("  {} {}", theme.dim.apply_to("version flag:"), flag));
            }
            if !tool.dependencies.is_empty() {
                ui.message(&format!(
                    "  {} {}",
                    theme.dim.apply_to("depends on:"),
                    tool.dependencies.join(", ")
                ));
            }
            for (i, method) in tool.methods.iter().enumerate() {
                ui.message(&format!(
                    "  {}. {}",
                    i + 1,
                    theme.pending.apply_to(&method.name)
                ));
                for command in &method.commands {
                    ui.message(&format!("     {} {}", theme.dim.apply_to("$"), command));
                }
            }
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = load_config(&self.config_path)?;
        let tools = listing(&catalog);

        if self.args.json {
            let json = serde_json::to_string_pretty(&tools)
                .context("Failed to serialize tool listing")?;
            ui.message(&json);
        } else {
            self.print_text(&tools, ui);
        }

        Ok(CommandResult::success())
    }
}
