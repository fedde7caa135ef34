//! # CLI Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the menu loop                          │
//! │                                                                         │
//! │  handler(...) -> CliResult<Flow>                                        │
//! │         │                                                               │
//! │         ├── CliError::Core(e) ──► report(e) printed, loop continues     │
//! │         │                                                               │
//! │         ├── CliError::InputClosed ──► session ends normally             │
//! │         │                                                               │
//! │         └── CliError::Io(e) ──► propagated out of run(), exit != 0      │
//! │                                                                         │
//! │  Every branch then prints "Operação finalizada." (except Io).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use loja_core::{CoreError, ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A business rule failed; reported to the shopper.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// stdin reached end of file while waiting for input.
    #[error("input closed")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(err.into())
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// The line shown to the shopper for a failed operation.
pub fn report(err: &CoreError) -> String {
    match err.kind() {
        ErrorKind::ProductNotFound | ErrorKind::InsufficientBalance => format!("Erro: {err}"),
        ErrorKind::InvalidInput => format!("Erro: Entrada inválida. {err}"),
        ErrorKind::Unexpected => format!("Erro inesperado: {err}"),
    }
}
