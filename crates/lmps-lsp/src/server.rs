use crate::config::LmpsConfig;
use crate::document::{DocumentState, ServerState};
use crate::handlers::{completion, diagnostics, hover};
use lmps_core::{DocIndex, MANUAL_BASE_URL};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp_server::ls_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DiagnosticOptions,
    DiagnosticServerCapabilities, DidChangeTextDocumentParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, DocumentDiagnosticParams, DocumentDiagnosticReport,
    DocumentDiagnosticReportResult, ExecuteCommandOptions, ExecuteCommandParams,
    FullDocumentDiagnosticReport, Hover, HoverParams, HoverProviderCapability, InitializeParams,
    InitializeResult, InitializedParams, MessageType, RelatedFullDocumentDiagnosticReport,
    ServerCapabilities, ServerInfo, ShowDocumentParams, TextDocumentSyncCapability,
    TextDocumentSyncKind, Uri,
};
use tower_lsp_server::{Client, LanguageServer, jsonrpc::Result};

/// LSP command identifiers.
mod commands {
    /// Command to open the online manual in the user's browser.
    pub const SHOW_MANUAL: &str = "lmps-lsp.showManual";
}

pub struct Backend {
    pub(crate) client: Client,
    state: Arc<ServerState>,
    config: Arc<RwLock<LmpsConfig>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(ServerState::new()),
            config: Arc::new(RwLock::new(LmpsConfig::default())),
        }
    }

    /// Rescans a document and replaces its published diagnostics.
    async fn publish_diagnostics(&self, uri: Uri) {
        let items = diagnostics::handle_diagnostics(&self.state, &uri);
        tracing::debug!("publishing {} diagnostics for {:?}", items.len(), uri);
        self.client.publish_diagnostics(uri, items, None).await;
    }

    /// Swaps in a custom documentation dataset configured by the client.
    async fn load_documentation_file(&self, path: &std::path::Path) {
        match DocIndex::from_file(path) {
            Ok(index) => {
                tracing::info!(
                    "loaded documentation index from {} ({} entries)",
                    path.display(),
                    index.len()
                );
                self.state.set_doc_index(index);
            }
            Err(e) => {
                tracing::error!(
                    "failed to load documentation index from {}: {}",
                    path.display(),
                    e
                );
                self.client
                    .log_message(
                        MessageType::ERROR,
                        format!("Could not load documentation file: {}", e),
                    )
                    .await;
            }
        }
    }

    fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                resolve_provider: Some(false),
                ..Default::default()
            }),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            diagnostic_provider: Some(DiagnosticServerCapabilities::Options(DiagnosticOptions {
                identifier: Some("lmps".into()),
                inter_file_dependencies: false,
                workspace_diagnostics: false,
                ..Default::default()
            })),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![commands::SHOW_MANUAL.into()],
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("initializing lmps-lsp server");

        if let Some(init_options) = params.initialization_options
            && let Ok(config) = serde_json::from_value::<LmpsConfig>(init_options)
        {
            tracing::debug!("loaded configuration: {:?}", config);
            if let Some(path) = config.documentation_file.clone() {
                self.load_documentation_file(&path).await;
            }
            *self.config.write().await = config;
        }

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "lmps-lsp".into(),
                version: Some(env!("CARGO_PKG_VERSION").into()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("lmps-lsp server initialized");
        self.client
            .log_message(MessageType::INFO, "lmps-lsp ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down lmps-lsp server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::info!("document opened: {:?}", uri);

        self.state
            .update_document(uri.clone(), DocumentState::new(params.text_document.text));
        self.publish_diagnostics(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync: the last change event carries the whole document.
        if let Some(change) = params.content_changes.into_iter().next_back() {
            self.state
                .update_document(uri.clone(), DocumentState::new(change.text));
            self.publish_diagnostics(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::info!("document closed: {:?}", uri);

        self.state.remove_document(&uri);
        // Clear stale diagnostics for the closed document.
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let options = { self.config.read().await.hover.clone() };
        Ok(hover::handle_hover(&self.state, &params, &options))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let options = { self.config.read().await.auto_complete.clone() };
        Ok(completion::handle_completion(&self.state, &params, &options))
    }

    async fn diagnostic(
        &self,
        params: DocumentDiagnosticParams,
    ) -> Result<DocumentDiagnosticReportResult> {
        let uri = params.text_document.uri;
        tracing::debug!("diagnostic request for: {:?}", uri);

        let items = diagnostics::handle_diagnostics(&self.state, &uri);

        Ok(DocumentDiagnosticReportResult::Report(
            DocumentDiagnosticReport::Full(RelatedFullDocumentDiagnosticReport {
                related_documents: None,
                full_document_diagnostic_report: FullDocumentDiagnosticReport {
                    result_id: None,
                    items,
                },
            }),
        ))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        tracing::info!("execute_command: {:?}", params.command);

        if params.command == commands::SHOW_MANUAL {
            let manual = format!("{}Manual.html", MANUAL_BASE_URL);
            match manual.parse::<Uri>() {
                Ok(uri) => {
                    let request = ShowDocumentParams {
                        uri,
                        external: Some(true),
                        take_focus: None,
                        selection: None,
                    };
                    if let Err(e) = self.client.show_document(request).await {
                        tracing::error!("failed to open manual: {:?}", e);
                    }
                }
                Err(e) => tracing::error!("invalid manual URL: {}", e),
            }
        }

        Ok(None)
    }
}
