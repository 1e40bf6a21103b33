//! Open-document bookkeeping and the shared server state.

use dashmap::DashMap;
use lmps_core::DocIndex;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tower_lsp_server::ls_types::Uri;

/// Documentation dataset bundled into the binary.
static BUNDLED_INDEX: &str = include_str!("../assets/doc_index.json");

/// State for a single open document.
///
/// Input scripts are small, so the full text is kept as-is and lines are
/// looked up on demand; there is no incremental sync.
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
}

impl DocumentState {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Returns the text of a zero-based line, without its terminator.
    pub fn line(&self, idx: u32) -> Option<&str> {
        self.content.lines().nth(idx as usize)
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Global LSP server state.
///
/// Shared across all handlers via `Arc`. Documents live in a concurrent
/// map; the documentation index is read-only after startup apart from an
/// optional swap when the client configures a custom dataset.
pub struct ServerState {
    /// Open documents by URI
    pub documents: DashMap<Uri, DocumentState>,
    /// Active documentation index
    index: RwLock<Arc<DocIndex>>,
}

impl ServerState {
    /// Creates server state backed by the bundled documentation dataset.
    pub fn new() -> Self {
        Self::with_index(load_bundled_index())
    }

    /// Creates server state with an explicit index (tests use this to
    /// control exactly which commands are known).
    pub fn with_index(index: DocIndex) -> Self {
        Self {
            documents: DashMap::new(),
            index: RwLock::new(Arc::new(index)),
        }
    }

    /// Returns a handle to the active documentation index.
    pub fn doc_index(&self) -> Arc<DocIndex> {
        match self.index.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the active documentation index.
    pub fn set_doc_index(&self, index: DocIndex) {
        let replacement = Arc::new(index);
        match self.index.write() {
            Ok(mut guard) => *guard = replacement,
            Err(poisoned) => *poisoned.into_inner() = replacement,
        }
    }

    pub fn get_document(
        &self,
        uri: &Uri,
    ) -> Option<dashmap::mapref::one::Ref<'_, Uri, DocumentState>> {
        self.documents.get(uri)
    }

    pub fn update_document(&self, uri: Uri, state: DocumentState) {
        self.documents.insert(uri, state);
    }

    pub fn remove_document(&self, uri: &Uri) -> Option<(Uri, DocumentState)> {
        self.documents.remove(uri)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_bundled_index() -> DocIndex {
    DocIndex::from_json(BUNDLED_INDEX).unwrap_or_else(|e| {
        tracing::error!("failed to parse bundled documentation index: {}", e);
        DocIndex::default()
    })
}

/// Returns the directory of a file URI, used to resolve relative paths in
/// the script being edited. Non-file URIs have no base directory.
pub fn base_dir(uri: &Uri) -> Option<PathBuf> {
    let path = uri.to_file_path()?;
    path.parent().map(std::path::Path::to_path_buf)
}
