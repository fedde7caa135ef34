//! # Error Types
//!
//! Domain-specific error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loja-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  loja-cli errors (app)                                                 │
//! │  └── CliError         - CoreError or fatal terminal I/O                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ErrorKind → "Erro: ..." line      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text is the message shown to the shopper
//! 3. Every variant classifies into exactly one [`ErrorKind`]

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Error Kind
// =============================================================================

/// The classification every recoverable error falls into.
///
/// The menu loop uses this to pick the report prefix:
/// ```text
/// ProductNotFound      → "Erro: <message>"
/// InsufficientBalance  → "Erro: <message>"
/// InvalidInput         → "Erro: Entrada inválida. <message>"
/// Unexpected           → "Erro inesperado: <message>"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ProductNotFound,
    InsufficientBalance,
    InvalidInput,
    Unexpected,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal: the caller reports them and keeps going.
/// Every operation checks all of its preconditions before mutating state,
/// so receiving one of these means nothing changed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Add-to-cart referenced a code that is not in the catalog.
    #[error("Produto não encontrado.")]
    ProductNotFound(String),

    /// Checkout total exceeds the session balance.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart total: 150.00€, balance: 100.00€
    ///      │
    ///      ▼
    /// InsufficientBalance { total: 150.00€, balance: 100.00€ }
    ///      │
    ///      ▼
    /// "Erro: Saldo insuficiente para realizar o pagamento."
    /// ```
    #[error("Saldo insuficiente para realizar o pagamento.")]
    InsufficientBalance { total: Money, balance: Money },

    /// Checkout was requested with nothing in the cart.
    #[error("O carrinho está vazio.")]
    EmptyCart,

    /// A quantity or amount left the representable range.
    #[error("o valor excede o limite suportado")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies this error for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_) => ErrorKind::ProductNotFound,
            CoreError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            CoreError::EmptyCart | CoreError::Validation(_) => ErrorKind::InvalidInput,
            CoreError::AmountOverflow => ErrorKind::Unexpected,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when typed input or catalog data doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("O campo {field} é obrigatório.")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("A {field} deve ser maior que zero.")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("O {field} não pode ser negativo.")]
    MustNotBeNegative { field: String },

    /// Text typed where a whole number was expected.
    #[error("'{input}' não é um número inteiro.")]
    NotAnInteger { input: String },

    /// A whole number too large (or too small) to be held.
    #[error("'{input}' está fora do intervalo suportado.")]
    OutOfRange { input: String },

    /// Text that cannot be read as an amount of money.
    #[error("'{input}' não é um valor monetário válido.")]
    InvalidAmount { input: String },

    /// Duplicate value (e.g., two products sharing a code).
    #[error("O {field} '{value}' já existe.")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
