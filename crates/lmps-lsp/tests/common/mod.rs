//! Common test utilities for integration tests.
//!
//! Provides the `LspClient` used to drive the server binary over its
//! stdio JSON-RPC transport.

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, Command, Stdio};

/// LSP test client for communicating with the server binary.
pub(crate) struct LspClient {
    process: Child,
    /// Notifications captured while waiting for responses, in order.
    notifications: Vec<(String, Value)>,
    reader: Option<BufReader<std::process::ChildStdout>>,
}

impl LspClient {
    /// Spawn the lmps-lsp binary.
    pub(crate) fn spawn() -> Self {
        let mut process = Command::new(env!("CARGO_BIN_EXE_lmps-lsp"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn lmps-lsp binary");

        let stdout = process.stdout.take().expect("Failed to capture stdout");
        let reader = BufReader::new(stdout);

        Self {
            process,
            notifications: Vec::new(),
            reader: Some(reader),
        }
    }

    /// Send a JSON-RPC message to the server.
    pub(crate) fn send(&mut self, message: &Value) {
        let body = serde_json::to_string(message).unwrap();
        let header = format!("Content-Length: {}\r\n\r\n", body.len());

        let stdin = self.process.stdin.as_mut().expect("stdin not captured");
        stdin.write_all(header.as_bytes()).unwrap();
        stdin.write_all(body.as_bytes()).unwrap();
        stdin.flush().unwrap();
    }

    /// Read one JSON-RPC message (response or notification) from the server.
    fn read_message(&mut self) -> Value {
        let reader = self.reader.as_mut().expect("reader not initialized");

        // Read headers
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            let bytes_read = reader.read_line(&mut line).expect("Failed to read header");

            // EOF - server closed connection
            assert!(bytes_read != 0, "Server closed connection unexpectedly");

            if line == "\r\n" || line == "\n" {
                break;
            }

            if line.to_lowercase().starts_with("content-length:") {
                content_length = line
                    .split(':')
                    .nth(1)
                    .unwrap()
                    .trim()
                    .parse()
                    .expect("Invalid content length");
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).expect("Failed to read body");

        serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!("Invalid JSON: {e} in: {:?}", String::from_utf8_lossy(&body))
        })
    }

    /// Read until the response with the given id arrives, capturing any
    /// notifications seen on the way.
    pub(crate) fn read_response(&mut self, expected_id: i64) -> Value {
        loop {
            let message = self.read_message();

            if message.get("id").is_none() {
                if let Some(method) = message.get("method").and_then(|m| m.as_str()) {
                    let params = message.get("params").cloned().unwrap_or(Value::Null);
                    self.notifications.push((method.to_string(), params));
                }
                continue;
            }

            if message.get("id") == Some(&json!(expected_id)) {
                return message;
            }
        }
    }

    /// Read until a notification with the given method arrives.
    ///
    /// Returns its params. Previously captured notifications are checked
    /// first.
    pub(crate) fn wait_for_notification(&mut self, method: &str) -> Value {
        if let Some(pos) = self.notifications.iter().position(|(m, _)| m == method) {
            return self.notifications.remove(pos).1;
        }

        loop {
            let message = self.read_message();
            if message.get("id").is_some() {
                continue;
            }
            let Some(got) = message.get("method").and_then(|m| m.as_str()) else {
                continue;
            };
            let params = message.get("params").cloned().unwrap_or(Value::Null);
            if got == method {
                return params;
            }
            self.notifications.push((got.to_string(), params));
        }
    }

    /// Initialize the LSP session.
    pub(crate) fn initialize(&mut self) -> Value {
        self.initialize_with_options(Value::Null)
    }

    /// Initialize the LSP session with initialization options.
    pub(crate) fn initialize_with_options(&mut self, options: Value) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "processId": null,
                "capabilities": {
                    "textDocument": {
                        "hover": {
                            "contentFormat": ["markdown", "plaintext"]
                        },
                        "completion": {},
                        "publishDiagnostics": {}
                    }
                },
                "initializationOptions": options,
                "rootUri": "file:///tmp",
                "workspaceFolders": null
            }
        }));

        let response = self.read_response(1);

        // Send initialized notification
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "initialized",
            "params": {}
        }));

        response
    }

    /// Open a text document.
    pub(crate) fn did_open(&mut self, uri: &str, text: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": uri,
                    "languageId": "lmps",
                    "version": 1,
                    "text": text
                }
            }
        }));
    }

    /// Replace a document's content (full sync).
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn did_change(&mut self, uri: &str, version: i64, text: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didChange",
            "params": {
                "textDocument": {"uri": uri, "version": version},
                "contentChanges": [{"text": text}]
            }
        }));
    }

    /// Request hover information.
    pub(crate) fn hover(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "textDocument/hover",
            "params": {
                "textDocument": {"uri": uri},
                "position": {"line": line, "character": character}
            }
        }));
        self.read_response(id)
    }

    /// Request completions.
    pub(crate) fn completion(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "textDocument/completion",
            "params": {
                "textDocument": {"uri": uri},
                "position": {"line": line, "character": character}
            }
        }));
        self.read_response(id)
    }

    /// Shutdown the server.
    pub(crate) fn shutdown(&mut self) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 999,
            "method": "shutdown"
        }));
        self.read_response(999)
    }
}

impl Drop for LspClient {
    fn drop(&mut self) {
        let _ = self.process.kill();
    }
}
