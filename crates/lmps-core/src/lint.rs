//! Line-level diagnostics for file-reading commands.
//!
//! Each line is checked independently; the scan carries no cross-line
//! state and is re-run in full on every document change. A check yields
//! zero or more positioned diagnostics which the caller aggregates.

use crate::text;
use std::path::Path;
use tower_lsp_server::ls_types::{Diagnostic, DiagnosticSeverity, Position, Range};

const DIAGNOSTIC_SOURCE: &str = "lmps";

/// Commands whose argument names a file read from disk, with the index of
/// the path argument (`molecule` takes an ID before the file).
const READ_COMMANDS: &[(&str, usize)] = &[
    ("read_data", 1),
    ("read_restart", 1),
    ("read_dump", 1),
    ("include", 1),
    ("molecule", 2),
];

/// A whitespace-delimited token with its byte offset on the line.
struct Token<'a> {
    text: &'a str,
    start: usize,
}

/// Splits the code part of a line (everything before `#`) into tokens.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    let code = match line.find('#') {
        Some(comment) => &line[..comment],
        None => line,
    };

    let mut tokens = Vec::new();
    let mut start = None;
    for (offset, ch) in code.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(Token {
                    text: &code[begin..offset],
                    start: begin,
                });
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: &code[begin..],
            start: begin,
        });
    }
    tokens
}

fn token_range(line: &str, line_idx: u32, token: &Token<'_>) -> Range {
    let start = text::byte_to_utf16_col(line, token.start);
    let end = text::byte_to_utf16_col(line, token.start + token.text.len());
    Range::new(Position::new(line_idx, start), Position::new(line_idx, end))
}

fn diagnostic(range: Range, severity: DiagnosticSeverity, message: String) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        code: None,
        code_description: None,
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message,
        related_information: None,
        tags: None,
        data: None,
    }
}

fn path_exists(path: &str, base_dir: Option<&Path>) -> bool {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.exists();
    }
    match base_dir {
        Some(dir) => dir.join(candidate).exists(),
        // No directory to resolve against (unsaved buffer); nothing to
        // check.
        None => true,
    }
}

/// Checks one line for a file-reading command with a malformed or
/// unreachable path argument.
///
/// Relative paths resolve against `base_dir`, normally the directory of
/// the script being edited. Arguments containing `$` variable
/// substitutions or `*` wildcards cannot be resolved statically and are
/// skipped.
pub fn check_read_paths(line: &str, line_idx: u32, base_dir: Option<&Path>) -> Vec<Diagnostic> {
    let tokens = tokenize(line);
    let Some(command) = tokens.first() else {
        return Vec::new();
    };
    let Some(&(_, path_arg)) = READ_COMMANDS
        .iter()
        .find(|(name, _)| *name == command.text)
    else {
        return Vec::new();
    };

    let Some(path_token) = tokens.get(path_arg) else {
        return vec![diagnostic(
            token_range(line, line_idx, command),
            DiagnosticSeverity::ERROR,
            format!("{} expects a file name argument", command.text),
        )];
    };

    if path_token.text.contains('$') || path_token.text.contains('*') {
        return Vec::new();
    }

    if path_exists(path_token.text, base_dir) {
        return Vec::new();
    }

    vec![diagnostic(
        token_range(line, line_idx, path_token),
        DiagnosticSeverity::WARNING,
        format!("cannot find file: {}", path_token.text),
    )]
}

/// Scans a whole document, composing the per-line check over every line.
pub fn scan_document(content: &str, base_dir: Option<&Path>) -> Vec<Diagnostic> {
    content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| check_read_paths(line, idx as u32, base_dir))
        .collect()
}
