//! # Session
//!
//! Everything one run of the menu owns: the catalog, the cart and the
//! balance. Built once at startup and handed to every menu handler.
//!
//! ```text
//! Session::new(catalog, 500.00€)
//!     │
//!     ├── add_to_cart(code, qty)   cart mutation
//!     ├── total()                  read
//!     └── checkout()               balance -= total, cart cleared (atomic)
//! ```

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::checkout::{simulate_payment, Receipt};
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{cart_total, priced_lines, PricedLine};
use crate::validation::validate_balance;

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    balance: Money,
}

impl Session {
    /// Starts a session with an empty cart.
    ///
    /// The caller is expected to pass a non-negative balance; use
    /// [`Session::with_balance`] when it comes from user input.
    pub fn new(catalog: Catalog, balance: Money) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            balance,
        }
    }

    /// Starts a session after checking the balance is not negative.
    pub fn with_balance(catalog: Catalog, balance: Money) -> CoreResult<Self> {
        validate_balance(balance)?;
        Ok(Session::new(catalog, balance))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds to the cart; see [`Cart::add`] for the validation order.
    pub fn add_to_cart(&mut self, code: &str, quantity: i64) -> CoreResult<&Product> {
        self.cart.add(&self.catalog, code, quantity)
    }

    /// Current cart total.
    pub fn total(&self) -> CoreResult<Money> {
        cart_total(&self.catalog, &self.cart)
    }

    /// Current cart lines with their totals.
    pub fn lines(&self) -> CoreResult<Vec<PricedLine<'_>>> {
        priced_lines(&self.catalog, &self.cart)
    }

    /// Pays for the cart.
    ///
    /// On success the balance becomes the receipt's remaining balance and
    /// the cart is emptied. On failure neither changes.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        let receipt = simulate_payment(&self.catalog, &self.cart, self.balance)?;
        self.balance = receipt.remaining_balance;
        self.cart.clear();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ErrorKind};
    use crate::DEFAULT_STARTING_BALANCE;

    fn session() -> Session {
        Session::new(Catalog::default_store(), DEFAULT_STARTING_BALANCE)
    }

    #[test]
    fn test_buy_two_shirts() {
        let mut session = session();

        session.add_to_cart("1", 2).unwrap();
        assert_eq!(session.cart().quantity_of("1"), 2);
        assert_eq!(session.total().unwrap(), Money::from_cents(4_000));

        let receipt = session.checkout().unwrap();

        assert_eq!(receipt.amount, Money::from_cents(4_000));
        assert_eq!(session.balance(), Money::from_cents(46_000));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_unknown_product_keeps_cart_empty() {
        let mut session = session();

        let err = session.add_to_cart("9", 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ProductNotFound);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_empty_checkout_keeps_balance() {
        let mut session = session();

        let err = session.checkout().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(session.balance(), DEFAULT_STARTING_BALANCE);
    }

    #[test]
    fn test_insufficient_balance_keeps_cart_and_balance() {
        let mut session = Session::new(Catalog::default_store(), Money::from_cents(9_999));
        session.add_to_cart("3", 1).unwrap();

        let err = session.checkout().unwrap_err();

        assert!(matches!(err, CoreError::InsufficientBalance { .. }));
        assert_eq!(session.balance(), Money::from_cents(9_999));
        assert_eq!(session.cart().quantity_of("3"), 1);
    }

    #[test]
    fn test_balance_carries_across_checkouts() {
        let mut session = session();

        session.add_to_cart("3", 3).unwrap();
        session.checkout().unwrap();
        assert_eq!(session.balance(), Money::from_cents(20_000));

        session.add_to_cart("2", 4).unwrap();
        session.checkout().unwrap();
        assert!(session.balance().is_zero());

        session.add_to_cart("4", 1).unwrap();
        let err = session.checkout().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
        assert_eq!(session.cart().quantity_of("4"), 1);
    }

    #[test]
    fn test_lines_reflect_cart() {
        let mut session = session();
        session.add_to_cart("2", 1).unwrap();
        session.add_to_cart("2", 1).unwrap();

        let lines = session.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.name, "Calças");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total, Money::from_cents(10_000));
    }

    #[test]
    fn test_with_balance_rejects_negative() {
        assert!(Session::with_balance(Catalog::default_store(), Money::from_cents(-1)).is_err());
        let session = Session::with_balance(Catalog::default_store(), Money::zero()).unwrap();
        assert!(session.balance().is_zero());
    }
}
