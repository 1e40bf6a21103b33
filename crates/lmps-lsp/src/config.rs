use lmps_core::{CompletionOptions, HoverOptions};
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration for the lmps-lsp server.
///
/// Provided by the LSP client via initialization options. All fields use
/// sensible defaults if not specified; the two option namespaces are the
/// read-only snapshots the core consumes per request.
///
/// # Examples
///
/// ```
/// use lmps_lsp::config::LmpsConfig;
/// use lmps_core::DetailLevel;
///
/// let json = r#"{
///     "hover": {
///         "enabled": true,
///         "detail": "Complete"
///     },
///     "auto_complete": {
///         "insert_syntax": true
///     }
/// }"#;
///
/// let config: LmpsConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.hover.detail, DetailLevel::Complete);
/// assert!(config.auto_complete.insert_syntax);
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct LmpsConfig {
    #[serde(default)]
    pub auto_complete: CompletionOptions,
    #[serde(default)]
    pub hover: HoverOptions,
    /// Optional path to a custom documentation dataset (JSON array of
    /// entries). When absent the bundled dataset is used.
    #[serde(default)]
    pub documentation_file: Option<PathBuf>,
}
