//! # Pricing
//!
//! Pure functions turning a cart into amounts.
//!
//! ```text
//! line_total  = price(code) × quantity
//! cart_total  = Σ line_total   (0.00€ for an empty cart)
//! ```
//!
//! Overflow is the only failure; it surfaces as [`CoreError::AmountOverflow`].

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// One priced cart line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine<'c> {
    pub product: &'c Product,
    pub quantity: i64,
    pub line_total: Money,
}

/// Unit price × quantity.
pub fn line_total(price: Money, quantity: i64) -> CoreResult<Money> {
    price
        .checked_mul_quantity(quantity)
        .ok_or(CoreError::AmountOverflow)
}

/// Prices every cart entry in cart order.
///
/// Cart entries always reference catalog codes (see [`Cart::add`]); an entry
/// that somehow doesn't is reported as [`CoreError::ProductNotFound`].
pub fn priced_lines<'c>(catalog: &'c Catalog, cart: &Cart) -> CoreResult<Vec<PricedLine<'c>>> {
    cart.items()
        .iter()
        .map(|item| {
            let product = catalog
                .get(&item.code)
                .ok_or_else(|| CoreError::ProductNotFound(item.code.clone()))?;
            Ok(PricedLine {
                product,
                quantity: item.quantity,
                line_total: line_total(product.price, item.quantity)?,
            })
        })
        .collect()
}

/// Sum of every line total.
///
/// ## Example
/// ```rust
/// use loja_core::{pricing, Cart, Catalog, Money};
///
/// let catalog = Catalog::default_store();
/// let mut cart = Cart::new();
/// assert_eq!(pricing::cart_total(&catalog, &cart).unwrap(), Money::zero());
///
/// cart.add(&catalog, "1", 2).unwrap(); // 2 × 20.00€
/// cart.add(&catalog, "4", 1).unwrap(); // 1 × 15.00€
/// assert_eq!(pricing::cart_total(&catalog, &cart).unwrap(), Money::from_cents(5_500));
/// ```
pub fn cart_total(catalog: &Catalog, cart: &Cart) -> CoreResult<Money> {
    priced_lines(catalog, cart)?
        .iter()
        .try_fold(Money::zero(), |acc, line| {
            acc.checked_add(line.line_total)
                .ok_or(CoreError::AmountOverflow)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_cart_total_is_zero() {
        let catalog = Catalog::default_store();
        assert_eq!(cart_total(&catalog, &Cart::new()).unwrap(), Money::zero());
        assert!(priced_lines(&catalog, &Cart::new()).unwrap().is_empty());
    }

    #[test]
    fn test_total_matches_sum_of_lines() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        let quantities = [("1", 3), ("2", 1), ("3", 2), ("4", 5)];
        for (code, qty) in quantities {
            cart.add(&catalog, code, qty).unwrap();
        }

        let expected = quantities
            .iter()
            .map(|(code, qty)| catalog.get(code).unwrap().price.checked_mul_quantity(*qty))
            .try_fold(Money::zero(), |acc, line| acc.checked_add(line?))
            .unwrap();

        // 60 + 50 + 200 + 75
        assert_eq!(expected, Money::from_cents(38_500));
        assert_eq!(cart_total(&catalog, &cart).unwrap(), expected);
    }

    #[test]
    fn test_priced_lines_follow_cart_order() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "4", 2).unwrap();
        cart.add(&catalog, "1", 1).unwrap();

        let lines = priced_lines(&catalog, &cart).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.name, "Chapéu");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total, Money::from_cents(3_000));
        assert_eq!(lines[1].product.name, "Camisola");
        assert_eq!(lines[1].line_total, Money::from_cents(2_000));
    }

    #[test]
    fn test_line_overflow() {
        assert_eq!(
            line_total(Money::from_cents(2), i64::MAX).unwrap_err().kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_total_overflow() {
        let catalog = Catalog::default_store();
        let mut cart = Cart::new();
        cart.add(&catalog, "3", i64::MAX / 10_000).unwrap();
        cart.add(&catalog, "2", i64::MAX / 5_000).unwrap();

        let err = cart_total(&catalog, &cart).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
    }
}
