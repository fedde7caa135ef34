//! # Loja CLI Library
//!
//! Interactive shell around `loja-core`.
//!
//! ## Module Organization
//! ```text
//! loja_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── CLI error type and user-facing reports
//! ├── terminal.rs     ◄─── Line-oriented input/output
//! ├── menu.rs         ◄─── Menu choices and the session loop
//! └── commands/
//!     ├── catalog.rs  ◄─── 1 - Exibir produtos
//!     ├── cart.rs     ◄─── 2 - Adicionar ao carrinho, 3 - Ver carrinho
//!     └── checkout.rs ◄─── 4 - Pagamento
//! ```
//!
//! stdout carries only the shop transcript; logs go to stderr.

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod terminal;

use std::io;

use loja_core::{Catalog, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::CliResult;
use terminal::Terminal;

/// Runs one interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, writer = stderr               │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Config                                                         │
/// │     • LOJA_STARTING_BALANCE (default 500.00)                            │
/// │                                                                         │
/// │  3. Build Session                                                       │
/// │     • Default store catalog, empty cart                                 │
/// │                                                                         │
/// │  4. Menu Loop                                                           │
/// │     • Returns on "5 - Sair", end of input, or a terminal I/O failure    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = Config::from_env();
    let mut session = Session::with_balance(Catalog::default_store(), config.starting_balance)?;

    info!(
        balance = %session.balance(),
        products = session.catalog().len(),
        "Session started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    menu::run_session(&mut session, &mut terminal)?;

    info!(balance = %session.balance(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched menu choice and reported error
/// - `RUST_LOG=loja_cli=info` - Session start/end and payments
/// - Default: WARN (only a rejected configuration value; a normal run is silent)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
