use tracing_subscriber::fmt::time::uptime;
use tracing_subscriber::EnvFilter;

use super::MarketConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Call once per process.
pub fn setup_tracing(config: &MarketConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(uptime())
        .compact()
        .init();
}
