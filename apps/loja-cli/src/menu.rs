//! # Menu Loop
//!
//! A single "awaiting choice" state with five transitions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Awaiting choice                                   │
//! │                                                                         │
//! │   "1" ──► show_products ─┐                                             │
//! │   "2" ──► add_to_cart ───┤                                             │
//! │   "3" ──► show_cart ─────┤                                             │
//! │   "4" ──► pay ───────────┼──► report error (if any)                     │
//! │   "7" ──► "Opção inválida."                │                           │
//! │   "x" ──► InvalidInput ──┘                 ▼                           │
//! │                                   "Operação finalizada."               │
//! │   "5" ──► "ACABOU!" ──────────────────────►│──► halt                   │
//! │   EOF ────────────────────────────────────►│──► halt                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use loja_core::validation::parse_integer;
use loja_core::{Session, ValidationError};
use tracing::{debug, info};

use crate::commands::{cart, catalog, checkout};
use crate::error::{report, CliError, CliResult};
use crate::terminal::Terminal;

const MENU: [&str; 5] = [
    "1 - Exibir produtos",
    "2 - Adicionar ao carrinho",
    "3 - Ver carrinho e total",
    "4 - Pagamento",
    "5 - Sair",
];

/// One parsed menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowProducts,
    AddToCart,
    ShowCart,
    Checkout,
    Exit,
    /// A whole number that names no option, however large.
    Unknown,
}

impl MenuChoice {
    /// Parses a typed answer; non-integers are a validation error.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let number = match parse_integer(input) {
            Ok(number) => number,
            Err(ValidationError::OutOfRange { .. }) => return Ok(MenuChoice::Unknown),
            Err(e) => return Err(e),
        };

        Ok(match number {
            1 => MenuChoice::ShowProducts,
            2 => MenuChoice::AddToCart,
            3 => MenuChoice::ShowCart,
            4 => MenuChoice::Checkout,
            5 => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        })
    }
}

/// What the loop does after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the shopper exits or input ends.
///
/// Every `CoreError` is reported and the loop continues. Only terminal I/O
/// failures escape.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> CliResult<()> {
    loop {
        let flow = match step(session, term) {
            Ok(flow) => flow,
            Err(CliError::Core(err)) => {
                debug!(kind = ?err.kind(), error = %err, "Operation failed");
                term.line(report(&err))?;
                Flow::Continue
            }
            Err(CliError::InputClosed) => {
                info!("Input closed, ending session");
                Flow::Exit
            }
            Err(err @ CliError::Io(_)) => return Err(err),
        };

        term.line("")?;
        term.line("Operação finalizada.")?;

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// Shows the menu, reads one choice and dispatches it.
fn step<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> CliResult<Flow> {
    term.line("")?;
    for entry in MENU {
        term.line(entry)?;
    }
    let choice = MenuChoice::parse(&term.prompt("Escolha uma opção: ")?)?;
    debug!(?choice, "Menu choice");

    match choice {
        MenuChoice::ShowProducts => catalog::show_products(term, session.catalog())?,
        MenuChoice::AddToCart => cart::add_to_cart(term, session)?,
        MenuChoice::ShowCart => cart::show_cart(term, session)?,
        MenuChoice::Checkout => checkout::pay(term, session)?,
        MenuChoice::Exit => {
            term.line("ACABOU!")?;
            return Ok(Flow::Exit);
        }
        MenuChoice::Unknown => term.line("Opção inválida.")?,
    }

    Ok(Flow::Continue)
}
