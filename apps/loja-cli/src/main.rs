//! # Loja Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration from the environment
//! 3. Build the session (default catalog, empty cart, starting balance)
//! 4. Run the menu loop until "5 - Sair" or end of input

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    loja_cli::run()?;
    Ok(())
}
