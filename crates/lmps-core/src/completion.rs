//! Completion list construction.
//!
//! The whole command index is offered as completion candidates; the editor
//! does its own prefix filtering. Options mirror the host's auto-complete
//! settings namespace.

use crate::docs::DocIndex;
use serde::Deserialize;
use tower_lsp_server::ls_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
};

/// Read-only auto-complete snapshot, taken from host configuration once
/// per request.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Attach the short description and syntax block to each candidate.
    #[serde(default = "default_true")]
    pub hint: bool,
    /// Insert the full syntax template instead of just the command name.
    #[serde(default)]
    pub insert_syntax: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            hint: true,
            insert_syntax: false,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Builds the completion list for the given index.
///
/// Returns an empty list when completion is disabled. Items are sorted by
/// label so the output is deterministic.
pub fn completion_items(index: &DocIndex, options: &CompletionOptions) -> Vec<CompletionItem> {
    if !options.enabled {
        return Vec::new();
    }

    let mut items: Vec<CompletionItem> = index
        .entries()
        .map(|entry| {
            let detail = options
                .hint
                .then(|| entry.short_description.clone())
                .flatten();
            let documentation = options
                .hint
                .then(|| entry.syntax.as_ref())
                .flatten()
                .map(|syntax| {
                    Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: format!("```lmps\n{syntax}\n```"),
                    })
                });
            let insert_text = options
                .insert_syntax
                .then(|| entry.syntax.clone())
                .flatten();
            let insert_text_format = insert_text
                .is_some()
                .then_some(InsertTextFormat::PLAIN_TEXT);

            CompletionItem {
                label: entry.command.clone(),
                kind: Some(CompletionItemKind::KEYWORD),
                detail,
                documentation,
                insert_text,
                insert_text_format,
                ..Default::default()
            }
        })
        .collect();

    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}
