//! # Checkout
//!
//! Payment simulation: turns cart + balance into a receipt.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu option 4: Pagamento                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart empty? ──────────► EmptyCart            (nothing changes)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total > balance? ─────► InsufficientBalance  (nothing changes)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt { amount: total, remaining_balance: balance - total }          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session applies it: balance = remaining, cart cleared                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::cart_total;

/// Record of one successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Amount charged (the cart total).
    pub amount: Money,

    /// Balance left after the charge.
    pub remaining_balance: Money,

    /// When the payment went through.
    pub paid_at: DateTime<Utc>,
}

/// Validates and prices a payment without mutating anything.
///
/// ## Validation Order
/// 1. cart must not be empty → [`CoreError::EmptyCart`]
/// 2. total must not exceed `balance` → [`CoreError::InsufficientBalance`]
///
/// A total exactly equal to the balance is accepted and leaves `0.00€`.
pub fn simulate_payment(catalog: &Catalog, cart: &Cart, balance: Money) -> CoreResult<Receipt> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let total = cart_total(catalog, cart)?;
    if total > balance {
        return Err(CoreError::InsufficientBalance { total, balance });
    }

    let remaining_balance = balance
        .checked_sub(total)
        .ok_or(CoreError::AmountOverflow)?;

    Ok(Receipt {
        id: Uuid::new_v4(),
        amount: total,
        remaining_balance,
        paid_at: Utc::now(),
    })
}
