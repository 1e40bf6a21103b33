//! Hover handler: widen the cursor word, resolve it, render the entry.

use crate::document::ServerState;
use lmps_core::{HoverOptions, hover, resolver, snippet};
use tower_lsp_server::ls_types::{
    Hover, HoverContents, HoverParams, MarkupContent, MarkupKind, Position, Range,
};

/// Handles a hover request against a configuration snapshot.
pub fn handle_hover(
    state: &ServerState,
    params: &HoverParams,
    options: &HoverOptions,
) -> Option<Hover> {
    if !options.enabled {
        return None;
    }

    let uri = &params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    let doc = state.get_document(uri)?;
    let line = doc.line(position.line)?.to_owned();
    drop(doc);

    let span = snippet::word_at(&line, position.character)?;
    tracing::debug!("hover snippet: {:?}", span.text);

    let index = state.doc_index();
    let entry = resolver::resolve(index.as_ref(), &span.text)?;
    let markdown = hover::render(entry, options)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: markdown,
        }),
        range: Some(Range::new(
            Position::new(position.line, span.start),
            Position::new(position.line, span.end),
        )),
    })
}
