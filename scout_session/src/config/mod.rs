//! Configuration for the session exchange
//!
//! `constants` holds fixed properties of the games and the dashboard layout.
//! `runtime` holds user preferences loaded from the environment or a TOML file.

pub mod constants;
pub mod runtime;

pub use runtime::{ConfigError, ExchangePreferences, LoggingPreferences, RuntimeConfig};
