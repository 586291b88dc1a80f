//! System configuration, startup, and shutdown logic.

pub mod config;
pub mod market_system;
pub mod tracing;

pub use self::config::*;
pub use self::market_system::MarketSystem;
pub use self::tracing::setup_tracing;
