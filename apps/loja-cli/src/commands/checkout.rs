//! # Checkout Commands

use std::io::{BufRead, Write};

use loja_core::Session;
use tracing::info;

use crate::error::CliResult;
use crate::terminal::Terminal;

/// Pays for the cart and prints the charge and what is left.
///
/// ```text
/// Pagamento de 40.00€ realizado com sucesso!
/// Saldo restante: 460.00€
/// ```
pub fn pay<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &mut Session,
) -> CliResult<()> {
    let receipt = session.checkout()?;
    info!(
        receipt_id = %receipt.id,
        amount = %receipt.amount,
        remaining = %receipt.remaining_balance,
        paid_at = %receipt.paid_at,
        "Payment accepted"
    );

    term.line(format_args!(
        "Pagamento de {} realizado com sucesso!",
        receipt.amount
    ))?;
    term.line(format_args!("Saldo restante: {}", receipt.remaining_balance))?;
    Ok(())
}
