//! Fallback-chain documentation resolution.
//!
//! A snippet like `fix_modify AtC output every 10` does not say which of
//! its tokens form the documentation key: the primary keyword may be
//! followed by a style name, a sub-keyword, or the nested `AtC` sub-command
//! hierarchy at varying depths. The resolver probes a fixed sequence of
//! candidate keys, most specific first, and accepts the first one the index
//! knows.

use crate::docs::{DocEntry, DocLookup};

/// One segment of a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPart {
    /// The n-th whitespace-delimited snippet token. Missing tokens render
    /// as the empty string, degrading the key instead of failing it.
    Token(usize),
    /// A fixed namespace segment such as `"AtC"`.
    Literal(&'static str),
}

use KeyPart::{Literal, Token};

/// Candidate keys in probe order, most specific first.
///
/// The `AtC` levels cover the Atom-to-Continuum sub-command namespace,
/// whose keys embed a literal segment that never appears at a fixed snippet
/// position. Kept as data rather than hard-coded lookups so further nested
/// namespaces only need new rows here (or a custom chain via
/// [`resolve_with`]).
pub const FALLBACK_CHAIN: &[&[KeyPart]] = &[
    &[Token(0), Token(3)],
    &[Token(0), Literal("AtC"), Token(2), Token(3)],
    &[Token(0), Literal("AtC"), Token(2)],
    &[Token(0), Token(2)],
    &[Token(0), Token(1)],
    &[Token(0)],
];

/// Builds the candidate key for one pattern.
///
/// Parts are joined by single spaces. A missing token contributes an empty
/// segment, so `["region"]` under the first pattern yields `"region "`,
/// which misses and lets the shorter candidates take over.
pub fn candidate_key(pattern: &[KeyPart], tokens: &[&str]) -> String {
    let mut key = String::new();
    for (i, part) in pattern.iter().enumerate() {
        if i > 0 {
            key.push(' ');
        }
        match part {
            Token(n) => key.push_str(tokens.get(*n).copied().unwrap_or_default()),
            Literal(text) => key.push_str(text),
        }
    }
    key
}

/// Resolves a snippet against the default fallback chain.
///
/// Returns `None` when no candidate matches; for arbitrary cursor
/// positions that is the common case, not an error.
pub fn resolve<'a, L>(index: &'a L, snippet: &str) -> Option<&'a DocEntry>
where
    L: DocLookup + ?Sized,
{
    resolve_with(FALLBACK_CHAIN, index, snippet)
}

/// Resolves a snippet against a caller-supplied candidate chain.
pub fn resolve_with<'a, L>(
    chain: &[&[KeyPart]],
    index: &'a L,
    snippet: &str,
) -> Option<&'a DocEntry>
where
    L: DocLookup + ?Sized,
{
    let tokens: Vec<&str> = snippet.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    chain
        .iter()
        .find_map(|pattern| index.lookup(&candidate_key(pattern, &tokens)))
}
