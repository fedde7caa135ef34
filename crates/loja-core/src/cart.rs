//! # Cart
//!
//! The session's shopping cart: product code → requested quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu option              Operation               Cart change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  2 Adicionar ────────────► Cart::add() ─────────► new entry or qty += n │
//! │                                                                         │
//! │  3 Ver carrinho ─────────► Cart::items() ───────► (read only)          │
//! │                                                                         │
//! │  4 Pagamento (success) ──► Cart::clear() ───────► every entry removed  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::error::{CoreError, CoreResult};
use crate::validation::validate_quantity;

/// One cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    /// Catalog code of the product.
    pub code: String,

    /// Always greater than zero.
    pub quantity: i64,
}

/// The shopping cart.
///
/// ## Invariants
/// - every code exists in the catalog it was filled from
/// - codes are unique (adding the same code increases quantity)
/// - quantity is always > 0
/// - entries keep the order in which their code was first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds `quantity` of the product `code` to the cart.
    ///
    /// ## Validation Order
    /// 1. `code` must exist in `catalog` → [`CoreError::ProductNotFound`]
    /// 2. `quantity` must be > 0 → [`CoreError::Validation`]
    /// 3. the accumulated quantity must fit in an `i64` → [`CoreError::AmountOverflow`]
    ///
    /// All checks run before the cart is touched.
    ///
    /// ## Returns
    /// The catalog product, for the confirmation message.
    pub fn add<'c>(
        &mut self,
        catalog: &'c Catalog,
        code: &str,
        quantity: i64,
    ) -> CoreResult<&'c Product> {
        let product = catalog
            .get(code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;

        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.code == code) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CoreError::AmountOverflow)?;
            }
            None => self.items.push(CartItem {
                code: product.code.clone(),
                quantity,
            }),
        }

        Ok(product)
    }

    /// Quantity of `code` in the cart (zero when absent).
    pub fn quantity_of(&self, code: &str) -> i64 {
        self.items
            .iter()
            .find(|i| i.code == code)
            .map_or(0, |i| i.quantity)
    }

    /// Entries in first-added order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};

    #[test]
    fn test_add_new_item() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();

        let product = cart.add(&catalog, "1", 2).unwrap();

        assert_eq!(product.name, "Camisola");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();

        cart.add(&catalog, "2", 2).unwrap();
        cart.add(&catalog, "2", 3).unwrap();

        assert_eq!(cart.len(), 1); // Still one entry
        assert_eq!(cart.quantity_of("2"), 5);
    }

    #[test]
    fn test_items_keep_first_added_order() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();

        cart.add(&catalog, "3", 1).unwrap();
        cart.add(&catalog, "1", 1).unwrap();
        cart.add(&catalog, "3", 1).unwrap();

        let codes: Vec<&str> = cart.items().iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["3", "1"]);
    }

    #[test]
    fn test_unknown_code_leaves_cart_untouched() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 1).unwrap();
        let before = cart.clone();

        let err = cart.add(&catalog, "9", 1).unwrap_err();

        assert!(matches!(err, CoreError::ProductNotFound(ref code) if code == "9"));
        assert_eq!(err.kind(), ErrorKind::ProductNotFound);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_unknown_code_is_checked_before_quantity() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();

        let err = cart.add(&catalog, "9", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProductNotFound);
    }

    #[test]
    fn test_non_positive_quantity_leaves_cart_untouched() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "4", 1).unwrap();

        for qty in [0, -1, i64::MIN] {
            let err = cart.add(&catalog, "4", qty).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }

        assert_eq!(cart.quantity_of("4"), 1);
    }

    #[test]
    fn test_quantity_overflow_is_rejected() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", i64::MAX).unwrap();

        let err = cart.add(&catalog, "1", 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(cart.quantity_of("1"), i64::MAX);
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 2).unwrap();
        cart.add(&catalog, "2", 1).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("1"), 0);
    }
}
