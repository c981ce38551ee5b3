//! Language Server Protocol implementation for validador.
//!
//! This module provides an LSP server that gives editors:
//! - Error diagnostics on every change
//! - Unused-variable warnings when the program has no errors
//! - Hover information (token kind, declared type of variables)
//!
//! # Architecture
//!
//! The LSP server uses `tower-lsp` and communicates via JSON-RPC over stdio.
//! It keeps the content of open documents and re-validates on each change.
//!
//! ```text
//! Editor (VSCode, etc.)
//!     ↓ JSON-RPC over stdio
//! ValidadorLanguageServer
//!     ↓ Uses
//! validador::validate
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::ast::Span;
use crate::diagnostics::{Diagnostic as ValidationDiagnostic, Report};
use crate::lexer::{TokenKind, lex};
use crate::validator::validate;

/// Name reported as the source of every diagnostic.
const SOURCE_NAME: &str = "validador";

/// State for a single open document.
#[derive(Debug)]
pub struct DocumentState {
    /// The document's content.
    pub content: String,
    /// The document's version (for incremental updates).
    pub version: i32,
}

/// Shared state for the language server.
#[derive(Debug, Default)]
pub struct ServerState {
    /// Open documents indexed by URI.
    pub documents: HashMap<Url, DocumentState>,
}

/// The validador Language Server.
pub struct ValidadorLanguageServer {
    /// Client handle for sending notifications.
    client: Client,
    /// Shared server state.
    state: Arc<RwLock<ServerState>>,
}

impl ValidadorLanguageServer {
    /// Creates a new language server instance.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(ServerState::default())),
        }
    }

    /// Validates a document and publishes diagnostics.
    async fn analyze_document(&self, uri: &Url, content: &str, version: Option<i32>) {
        let diagnostics = get_diagnostics(content);
        log::debug!("publishing {} diagnostics for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, version)
            .await;
    }
}

/// Runs the validator and converts its report to LSP diagnostics.
fn get_diagnostics(source: &str) -> Vec<Diagnostic> {
    let report = validate(source);

    if !report.is_success() {
        return report
            .errors()
            .iter()
            .map(|error| error_to_lsp(source, error))
            .collect();
    }

    unused_to_lsp(source, &report)
}

fn error_to_lsp(source: &str, error: &ValidationDiagnostic) -> Diagnostic {
    Diagnostic {
        range: line_span_to_range(source, error.line, error.span),
        severity: Some(DiagnosticSeverity::ERROR),
        code: None,
        code_description: None,
        source: Some(SOURCE_NAME.to_string()),
        message: error.message.clone(),
        related_information: None,
        tags: None,
        data: None,
    }
}

/// One warning per unused variable, at its declaration.
fn unused_to_lsp(source: &str, report: &Report) -> Vec<Diagnostic> {
    report
        .unused_variables()
        .iter()
        .filter_map(|name| report.symbol(name))
        .map(|symbol| Diagnostic {
            range: line_span_to_range(source, symbol.line, Some(symbol.span)),
            severity: Some(DiagnosticSeverity::WARNING),
            code: None,
            code_description: None,
            source: Some(SOURCE_NAME.to_string()),
            message: format!("Variable '{}' declarada pero no utilizada", symbol.name),
            related_information: None,
            tags: Some(vec![DiagnosticTag::UNNECESSARY]),
            data: None,
        })
        .collect()
}

/// Gets hover information at a position.
fn get_hover_info(source: &str, position: Position) -> Option<String> {
    let line = source.split('\n').nth(position.line as usize)?;
    let offset = utf16_to_byte(line, position.character);

    let token = lex(line)
        .into_iter()
        .find(|t| t.span.start <= offset && offset < t.span.end)?;

    if token.kind == TokenKind::Variable {
        let report = validate(source);
        if let Some(symbol) = report.symbol(&token.text) {
            return Some(format!(
                "**Variable** `{}`: `{}`\n\nDeclarada en la línea {}",
                symbol.name, symbol.var_type, symbol.line
            ));
        }
    }

    Some(format!(
        "**Token:** `{:?}`\n\n**Text:** `{}`",
        token.kind, token.text
    ))
}

#[tower_lsp::async_trait]
impl LanguageServer for ValidadorLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Document sync - we want full content on each change
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "validador-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "validador LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let content = params.text_document.text;
        let version = params.text_document.version;

        {
            let mut state = self.state.write().await;
            state.documents.insert(
                uri.clone(),
                DocumentState {
                    content: content.clone(),
                    version,
                },
            );
        }

        self.analyze_document(&uri, &content, Some(version)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // FULL sync: a single change carrying the whole document
        if let Some(change) = params.content_changes.into_iter().next() {
            let content = change.text;

            {
                let mut state = self.state.write().await;
                if let Some(doc) = state.documents.get_mut(&uri) {
                    doc.content = content.clone();
                    doc.version = version;
                }
            }

            self.analyze_document(&uri, &content, Some(version)).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        {
            let mut state = self.state.write().await;
            state.documents.remove(&uri);
        }

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let content = {
            let state = self.state.read().await;
            state.documents.get(uri).map(|d| d.content.clone())
        };

        if let Some(content) = content
            && let Some(info) = get_hover_info(&content, position)
        {
            return Ok(Some(Hover {
                contents: HoverContents::Markup(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: info,
                }),
                range: None,
            }));
        }

        Ok(None)
    }
}

/// Converts a 1-based line number and a byte span within that line to an
/// LSP Range. Without a span the whole line is covered.
fn line_span_to_range(source: &str, line: usize, span: Option<Span>) -> Range {
    let index = line.saturating_sub(1);
    let text = source.split('\n').nth(index).unwrap_or("");
    let text = text.strip_suffix('\r').unwrap_or(text);
    let span = span.unwrap_or(Span::new(0, text.len()));

    Range {
        start: Position {
            line: index as u32,
            character: byte_to_utf16(text, span.start),
        },
        end: Position {
            line: index as u32,
            character: byte_to_utf16(text, span.end),
        },
    }
}

/// Converts a byte offset within a line to a UTF-16 column, the default
/// LSP position encoding.
fn byte_to_utf16(line: &str, offset: usize) -> u32 {
    line.char_indices()
        .take_while(|(i, _)| *i < offset)
        .map(|(_, c)| c.len_utf16() as u32)
        .sum()
}

/// Converts a UTF-16 column within a line to a byte offset.
fn utf16_to_byte(line: &str, character: u32) -> usize {
    let mut units = 0;
    for (i, c) in line.char_indices() {
        if units >= character {
            return i;
        }
        units += c.len_utf16() as u32;
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_utf16() {
        let line = "año = 5;";
        assert_eq!(byte_to_utf16(line, 0), 0);
        // 'ñ' is two bytes
        assert_eq!(byte_to_utf16(line, 4), 3);
        assert_eq!(byte_to_utf16(line, line.len()), 8);
    }

    #[test]
    fn test_utf16_to_byte() {
        let line = "año = 5;";
        assert_eq!(utf16_to_byte(line, 0), 0);
        assert_eq!(utf16_to_byte(line, 3), 4);
        assert_eq!(utf16_to_byte(line, 100), line.len());
    }

    #[test]
    fn test_columns_count_utf16_units() {
        // the emoji is four bytes and two UTF-16 units
        let line = "😀 x = 5;";
        assert_eq!(byte_to_utf16(line, 5), 3);
        assert_eq!(utf16_to_byte(line, 3), 5);

        let range = line_span_to_range(line, 1, Some(Span::new(5, 6)));
        assert_eq!(range.start, Position { line: 0, character: 3 });
        assert_eq!(range.end, Position { line: 0, character: 4 });
    }

    #[test]
    fn test_line_span_to_range() {
        let source = "x Entero;\n   y = 5;\n";

        let range = line_span_to_range(source, 2, Some(Span::new(3, 4)));
        assert_eq!(range.start, Position { line: 1, character: 3 });
        assert_eq!(range.end, Position { line: 1, character: 4 });

        let whole = line_span_to_range(source, 1, None);
        assert_eq!(whole.start, Position { line: 0, character: 0 });
        assert_eq!(whole.end, Position { line: 0, character: 9 });
    }

    #[test]
    fn test_diagnostics_for_errors() {
        let diagnostics = get_diagnostics("x Entero;\ny = 5;\nn Entero;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(diagnostics[0].message, "Variable 'y' no declarada");
        assert_eq!(diagnostics[0].range.start.line, 1);
    }

    #[test]
    fn test_diagnostics_for_unused() {
        let diagnostics = get_diagnostics("x Entero;\nn Entero;\nx = 1;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Some(DiagnosticSeverity::WARNING));
        assert_eq!(diagnostics[0].range.start, Position { line: 1, character: 0 });
        assert_eq!(diagnostics[0].range.end, Position { line: 1, character: 1 });
    }

    #[test]
    fn test_hover_shows_declared_type() {
        let source = "edad Entero;\nedad = 3;";
        let info = get_hover_info(source, Position { line: 1, character: 1 }).unwrap();
        assert!(info.contains("Entero"));
        assert!(info.contains("línea 1"));

        let info = get_hover_info(source, Position { line: 1, character: 5 }).unwrap();
        assert!(info.contains("Equals"));

        assert!(get_hover_info(source, Position { line: 7, character: 0 }).is_none());
    }
}
