//! # Catalog Commands

use std::io::{BufRead, Write};

use loja_core::Catalog;

use crate::error::CliResult;
use crate::terminal::Terminal;

/// Prints every product as `<code> - <name> - <price>`.
///
/// ```text
///
/// Produtos disponíveis:
/// 1 - Camisola - 20.00€
/// 2 - Calças - 50.00€
/// 3 - Ténis - 100.00€
/// 4 - Chapéu - 15.00€
/// ```
pub fn show_products<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    catalog: &Catalog,
) -> CliResult<()> {
    term.line("")?;
    term.line("Produtos disponíveis:")?;
    for product in catalog.products() {
        term.line(format_args!(
            "{} - {} - {}",
            product.code, product.name, product.price
        ))?;
    }
    Ok(())
}
