//! Completion handler: offer the command index as candidates.

use crate::document::ServerState;
use lmps_core::{CompletionOptions, completion_items};
use tower_lsp_server::ls_types::{CompletionParams, CompletionResponse};

/// Handles a completion request against a configuration snapshot.
///
/// The candidate list is position-independent; the editor filters by the
/// word being typed.
pub fn handle_completion(
    state: &ServerState,
    params: &CompletionParams,
    options: &CompletionOptions,
) -> Option<CompletionResponse> {
    let position = params.text_document_position.position;
    tracing::debug!(
        "completion request: uri={:?}, line={}, character={}",
        params.text_document_position.text_document.uri,
        position.line,
        position.character
    );

    let index = state.doc_index();
    let items = completion_items(index.as_ref(), options);
    if items.is_empty() {
        None
    } else {
        Some(CompletionResponse::Array(items))
    }
}
