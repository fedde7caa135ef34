//! # loja-core: Pure Business Logic for the Shop Simulator
//!
//! This crate holds every rule of the shop as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Loja Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    loja-cli (menu loop)                         │   │
//! │  │    Exibir ──► Adicionar ──► Ver carrinho ──► Pagamento          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Session                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Receipt  │  │   │
//! │  │   │  Catalog  │  │  pricing  │  │ CartItem  │  │  Session  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Products and the fixed store catalog
//! - [`cart`] - Cart entries and add-to-cart rules
//! - [`pricing`] - Line and cart totals
//! - [`checkout`] - Payment simulation against a balance
//! - [`session`] - Cart + balance owned by one run of the menu
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use loja_core::{Catalog, Money, Session};
//!
//! let mut session = Session::new(Catalog::default_store(), Money::from_cents(50_000));
//! session.add_to_cart("1", 2).unwrap();
//! assert_eq!(session.total().unwrap(), Money::from_cents(4_000));
//!
//! let receipt = session.checkout().unwrap();
//! assert_eq!(receipt.remaining_balance, Money::from_cents(46_000));
//! assert!(session.cart().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product};
pub use checkout::Receipt;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use session::Session;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Balance a session starts with when nothing else is configured (500.00€).
pub const DEFAULT_STARTING_BALANCE: Money = Money::from_cents(50_000);

/// Currency symbol appended to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "€";
