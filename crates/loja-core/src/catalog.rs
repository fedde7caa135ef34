//! # Catalog
//!
//! The products the shop sells, keyed by code.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session start ──► Catalog::default_store() ──► read-only until exit    │
//! │                                                                         │
//! │  code │ name     │ price                                               │
//! │  ─────┼──────────┼─────────                                            │
//! │   1   │ Camisola │  20.00€                                             │
//! │   2   │ Calças   │  50.00€                                             │
//! │   3   │ Ténis    │ 100.00€                                             │
//! │   4   │ Chapéu   │  15.00€                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listing order is insertion order, never sorted.

use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_code, validate_price, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Business identifier typed by the shopper ("1".."4" in the store).
    pub code: String,

    /// Display name shown in listings and confirmations.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable, ordered product list with lookup by code.
///
/// ## Invariants
/// - codes are unique and non-empty
/// - names are non-empty
/// - prices are non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::{Catalog, Money, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("A", "Meias", Money::from_cents(500)),
    /// ]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// let dup = Catalog::new(vec![
    ///     Product::new("A", "Meias", Money::from_cents(500)),
    ///     Product::new("A", "Luvas", Money::from_cents(900)),
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (i, product) in products.iter().enumerate() {
            validate_code(&product.code)?;
            validate_product_name(&product.name)?;
            validate_price(product.price)?;

            if products[..i].iter().any(|p| p.code == product.code) {
                return Err(ValidationError::Duplicate {
                    field: "código".to_string(),
                    value: product.code.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The fixed catalog the shop opens with.
    pub fn default_store() -> Self {
        Catalog {
            products: vec![
                Product::new("1", "Camisola", Money::from_cents(2_000)),
                Product::new("2", "Calças", Money::from_cents(5_000)),
                Product::new("3", "Ténis", Money::from_cents(10_000)),
                Product::new("4", "Chapéu", Money::from_cents(1_500)),
            ],
        }
    }

    /// Looks a product up by its code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// All products, in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
