//! Output formatting for CLI display
//!
//! Renders builder frames for the terminal and serializes selections for
//! export. `TerminalRenderer` is the CLI's `RenderSink`.

use crate::QbError;
use crate::builder::{BrowserFrame, RenderSink, SummaryFrame};
use crate::catalog::CategoryItem;
use crate::selection::Selection;
use clap::ValueEnum;
use colored::Colorize;

/// Selection export format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// `{"Category": ["attr", ...]}`
    #[default]
    Json,
    /// One `Category = ["attr", ...]` line per category
    Toml,
}

/// Serialize a selection for export
///
/// # Errors
///
/// Returns `QbError` if serialization fails.
pub fn export_selection(selection: &Selection, format: ExportFormat) -> Result<String, QbError> {
    let map = selection.to_map();
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&map)?),
        ExportFormat::Toml => toml::to_string(&map)
            .map_err(|e| QbError::InvalidInput(format!("Failed to serialize selection: {e}"))),
    }
}

/// Format the attribute column
///
/// In quiet mode only the attribute names are printed, one per line.
#[must_use]
pub fn format_browser(frame: &BrowserFrame, quiet: bool) -> String {
    if quiet {
        return frame.attributes.join("\n");
    }

    let mut out = String::new();
    out.push_str(&frame.title.bold().to_string());
    if !frame.search_term.trim().is_empty() {
        out.push_str(&format!(" {}", format!("(search: {})", frame.search_term).dimmed()));
    }
    out.push('\n');

    if frame.is_empty() {
        out.push_str(&format!("  {}\n", frame.placeholder.dimmed()));
    } else {
        for attribute in &frame.attributes {
            out.push_str(&format!("  [ ] {attribute}\n"));
        }
    }
    out
}

/// Format the summary column
///
/// In quiet mode each category is one `Category: a, b` line.
#[must_use]
pub fn format_summary(frame: &SummaryFrame, quiet: bool) -> String {
    if quiet {
        return frame
            .groups
            .iter()
            .map(|group| format!("{}: {}", group.category, group.attributes.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut out = String::new();
    out.push_str(&frame.title.bold().to_string());
    out.push('\n');

    if frame.is_empty() {
        out.push_str(&format!("  {}\n", frame.placeholder.dimmed()));
        return out;
    }

    for group in &frame.groups {
        out.push_str(&format!("  {}\n", group.category.cyan()));
        for attribute in &group.attributes {
            out.push_str(&format!("    {} {attribute}\n", "×".red()));
        }
    }
    out
}

/// Format a category list entry, marking the active one
#[must_use]
pub fn format_category(item: &CategoryItem, active: bool, quiet: bool) -> String {
    if quiet {
        item.id.clone()
    } else if active {
        format!("{} {} ({})", "▌".red(), item.label.bold(), item.id.dimmed())
    } else {
        format!("  {} ({})", item.label, item.id.dimmed())
    }
}

/// Render sink printing both columns to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer {
    quiet: bool,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl RenderSink for TerminalRenderer {
    fn render_attributes(&mut self, frame: &BrowserFrame) {
        println!("{}", format_browser(frame, self.quiet));
    }

    fn render_summary(&mut self, frame: &SummaryFrame) {
        println!("{}", format_summary(frame, self.quiet));
    }
}
