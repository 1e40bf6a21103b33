//! Hover content rendering.
//!
//! Pure formatting: a resolved [`DocEntry`] plus a [`HoverOptions`]
//! snapshot become a markdown block, or nothing. Resolution lives in
//! [`crate::resolver`]; nothing here touches the index.

use crate::docs::DocEntry;
use serde::Deserialize;
use std::fmt::Write;

/// Base URL of the online manual; section links append the entry's
/// `html_filename`.
pub const MANUAL_BASE_URL: &str = "https://docs.lammps.org/";

/// How much of the description section to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DetailLevel {
    Minimal,
    Complete,
}

/// Read-only hover display snapshot, taken from host configuration once
/// per request.
#[derive(Debug, Clone, Deserialize)]
pub struct HoverOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub examples: bool,
    #[serde(default = "default_detail")]
    pub detail: DetailLevel,
    #[serde(default)]
    pub restrictions: bool,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            examples: true,
            detail: default_detail(),
            restrictions: false,
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_detail() -> DetailLevel {
    DetailLevel::Minimal
}

/// Renders a documentation entry as markdown.
///
/// Returns `None` when hover display is disabled. Sections appear in fixed
/// order and are gated independently; a missing field never suppresses the
/// sections after it.
pub fn render(entry: &DocEntry, options: &HoverOptions) -> Option<String> {
    if !options.enabled {
        return None;
    }

    let mut content = String::new();

    if let Some(short) = &entry.short_description {
        let page = entry.html_filename.as_deref().unwrap_or("Manual.html");
        let _ = writeln!(
            content,
            "{short}. [Read more...]({MANUAL_BASE_URL}{page})"
        );
        content.push_str("\n --- \n");
    }

    if let Some(syntax) = &entry.syntax {
        content.push_str("### Syntax:\n");
        let _ = writeln!(content, "```lmps\n{syntax}\n```");
        if let Some(parameters) = &entry.parameters {
            let _ = writeln!(content, "{parameters}\n");
        }
    }

    if options.examples
        && let Some(examples) = &entry.examples
    {
        content.push_str("### Examples:\n");
        let _ = writeln!(content, "```lmps\n{examples}\n```");
    }

    if options.detail == DetailLevel::Complete
        && let Some(description) = &entry.description
    {
        content.push_str("### Description:\n");
        let _ = writeln!(content, "{description}");
    }

    if options.restrictions
        && let Some(restrictions) = &entry.restrictions
    {
        content.push_str("### Restrictions:\n");
        content.push_str(restrictions);
    }

    Some(content)
}
