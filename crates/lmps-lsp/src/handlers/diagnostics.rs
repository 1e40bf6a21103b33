//! Diagnostics handler: full-document file-path scan.

use crate::document::{self, ServerState};
use lmps_core::lint;
use tower_lsp_server::ls_types::{Diagnostic, Uri};

/// Produces the full diagnostics set for a document.
///
/// The scan is stateless and re-run in full on every change; the result
/// replaces whatever was published before.
pub fn handle_diagnostics(state: &ServerState, uri: &Uri) -> Vec<Diagnostic> {
    let Some(doc) = state.get_document(uri) else {
        tracing::warn!("document not found for diagnostics: {:?}", uri);
        return Vec::new();
    };

    let base_dir = document::base_dir(uri);
    lint::scan_document(&doc.content, base_dir.as_deref())
}
