//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   add_to_cart   ┌──────────┐   checkout::pay  ┌────────┐  │
//! │  │  Empty   │────────────────►│ In Cart  │─────────────────►│ Empty  │  │
//! │  └──────────┘                 └──────────┘                  └────────┘  │
//! │                                 │     ▲                                 │
//! │                                 └─────┘ add_to_cart / show_cart         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use loja_core::validation::parse_integer;
use loja_core::Session;
use tracing::debug;

use crate::commands::catalog::show_products;
use crate::error::CliResult;
use crate::terminal::Terminal;

/// Lists the catalog, asks for a code and a quantity, then adds to the cart.
///
/// Both answers are read before anything is validated, so a non-numeric
/// quantity is reported even when the code is unknown.
///
/// ## Output on success
/// ```text
/// 2x Camisola adicionado(s) ao carrinho.
/// ```
pub fn add_to_cart<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &mut Session,
) -> CliResult<()> {
    show_products(term, session.catalog())?;

    let code = term.prompt("Coloca o código do produto: ")?;
    let quantity = parse_integer(&term.prompt("Coloca a quantidade: ")?)?;
    debug!(code = ?code, quantity, "add_to_cart");

    let product = session.add_to_cart(&code, quantity)?;
    term.line(format_args!(
        "{}x {} adicionado(s) ao carrinho.",
        quantity, product.name
    ))?;
    Ok(())
}

/// Prints every cart line and the total.
///
/// ```text
///
/// Carrinho:
/// 2x Camisola - 40.00€
/// 1x Chapéu - 15.00€
/// Total: 55.00€
/// ```
pub fn show_cart<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &Session,
) -> CliResult<()> {
    // priced up front so an overflow prints nothing but the error
    let lines = session.lines()?;
    let total = session.total()?;

    term.line("")?;
    term.line("Carrinho:")?;
    for line in &lines {
        term.line(format_args!(
            "{}x {} - {}",
            line.quantity, line.product.name, line.line_total
        ))?;
    }
    term.line(format_args!("Total: {}", total))?;
    Ok(())
}
