//! Core abstractions for lmps-lsp.
//!
//! This crate holds everything about LAMMPS input scripts that does not
//! depend on a running language server: the documentation dataset model,
//! the fallback-chain resolver, the hover renderer, the completion list
//! builder, and the file-path lint.
//!
//! # Architecture
//!
//! Two independent pipelines share the document model:
//!
//! - **Resolution**: snippet text → [`resolver::resolve`] →
//!   [`docs::DocEntry`] → [`hover::render`] → markdown. Deterministic and
//!   side-effect-free; a miss is a normal `None`, not an error.
//! - **Linting**: document text → [`lint::scan_document`] → positioned
//!   diagnostics, one independent check per line.
//!
//! Host configuration enters as read-only snapshots ([`hover::HoverOptions`],
//! [`completion::CompletionOptions`]) so both pipelines are testable
//! without a live host.

pub mod completion;
pub mod docs;
pub mod error;
pub mod hover;
pub mod lint;
pub mod resolver;
pub mod snippet;
pub mod text;

// Re-export commonly used types
pub use completion::{CompletionOptions, completion_items};
pub use docs::{DocEntry, DocIndex, DocLookup};
pub use error::{LmpsError, Result};
pub use hover::{DetailLevel, HoverOptions, MANUAL_BASE_URL, render};
pub use lint::{check_read_paths, scan_document};
pub use resolver::{FALLBACK_CHAIN, KeyPart, candidate_key, resolve, resolve_with};
pub use snippet::{WordSpan, word_at};
