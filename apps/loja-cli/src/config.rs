//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LOJA_*`)
//! 2. Defaults (this file)
//!
//! With nothing set the shop opens exactly as it always has: 500.00€.
//! Read-only after initialization.

use loja_core::validation::validate_balance;
use loja_core::{Money, DEFAULT_STARTING_BALANCE};
use tracing::warn;

/// Environment variable holding the starting balance, e.g. `750.00`.
pub const STARTING_BALANCE_VAR: &str = "LOJA_STARTING_BALANCE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Balance the session starts with.
    pub starting_balance: Money,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl Config {
    /// Creates a Config from process environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LOJA_STARTING_BALANCE`: override the starting balance
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a Config from an arbitrary key lookup.
    ///
    /// Invalid values are logged and ignored, keeping the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(STARTING_BALANCE_VAR) {
            let parsed = raw
                .parse::<Money>()
                .and_then(|balance| validate_balance(balance).map(|()| balance));
            match parsed {
                Ok(balance) => config.starting_balance = balance,
                Err(e) => warn!(
                    var = STARTING_BALANCE_VAR,
                    value = %raw,
                    error = %e,
                    "Ignoring configuration value"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key: &str| (key == STARTING_BALANCE_VAR).then(|| value.to_string())
    }

    #[test]
    fn test_default_balance() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.starting_balance, Money::from_cents(50_000));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_balance_override() {
        let config = Config::from_lookup(lookup_with("750.25"));
        assert_eq!(config.starting_balance, Money::from_cents(75_025));

        let config = Config::from_lookup(lookup_with("0"));
        assert!(config.starting_balance.is_zero());
    }

    #[test]
    fn test_invalid_balance_keeps_default() {
        for raw in ["lots", "-10", "1.234", ""] {
            let config = Config::from_lookup(lookup_with(raw));
            assert_eq!(config.starting_balance, DEFAULT_STARTING_BALANCE, "{raw:?}");
        }
    }
}
