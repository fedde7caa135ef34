//! # Validation Module
//!
//! Input validation utilities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu loop (loja-cli)                                         │
//! │  └── parse_integer: typed text → i64                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Business rules (THIS MODULE)                                 │
//! │  ├── validate_quantity before a cart mutation                          │
//! │  └── validate_code / name / price when a catalog is built              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain operations (cart, checkout)                           │
//! │  └── existence, emptiness and balance checks                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::validation::{parse_integer, validate_quantity};
//!
//! let qty = parse_integer(" 3 ").unwrap();
//! validate_quantity(qty).unwrap();
//! assert!(parse_integer("três").is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "código".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "nome".to_string(),
        });
    }

    Ok(())
}

/// Parses typed text as a whole number.
///
/// Surrounding whitespace is ignored and a leading sign is accepted, so
/// `"-2"` parses and is rejected later by [`validate_quantity`] with the
/// quantity message instead of the "not a number" one.
///
/// A well-formed integer that does not fit in an `i64` is
/// [`ValidationError::OutOfRange`], not [`ValidationError::NotAnInteger`].
pub fn parse_integer(input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| {
        let input = trimmed.to_string();
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ValidationError::OutOfRange { input }
            }
            _ => ValidationError::NotAnInteger { input },
        }
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Menu option 2: Adicionar ao carrinho                                   │
/// │                                                                         │
/// │  "Coloca a quantidade: " 5                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → "A quantidade deve ser maior que zero."          │
/// │       │                                                                 │
/// │       └── OK → cart entry created or incremented                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantidade".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "preço".to_string(),
        });
    }

    Ok(())
}

/// Validates a session balance. Zero is allowed.
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "saldo".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
