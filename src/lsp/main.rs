//! validador Language Server - Entry Point
//!
//! This is the main entry point for the LSP server. It sets up the
//! tower-lsp service and runs it over stdio.
//!
//! # Usage
//!
//! The LSP server is typically started by an editor:
//!
//! ```bash
//! validador-lsp
//! ```
//!
//! For debugging, you can run with logging:
//!
//! ```bash
//! RUST_LOG=debug validador-lsp 2>lsp.log
//! ```

use tower_lsp::{LspService, Server};

use validador::lsp::ValidadorLanguageServer;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they don't interfere with LSP on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting validador LSP server v{}", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(ValidadorLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
}
