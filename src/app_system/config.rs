//! Runtime configuration for the [`MarketSystem`](super::MarketSystem).

use crate::error::ConfigError;

pub const ENV_BUFFER_SIZE: &str = "MARKET_BUFFER_SIZE";
pub const ENV_SEED_DEMO: &str = "MARKET_SEED_DEMO";
pub const ENV_LOG: &str = "MARKET_LOG";

/// Construct via [`MarketConfig::builder`] or [`MarketConfig::from_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// Load the demo accounts, categories and products at startup.
    pub seed_demo_data: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

/// Builder for [`MarketConfig`].
#[derive(Debug)]
pub struct MarketConfigBuilder {
    buffer_size: usize,
    seed_demo_data: bool,
    log_filter: String,
}

impl MarketConfig {
    /// Defaults: `buffer_size = 32`, `seed_demo_data = true`, `log_filter = "info"`.
    #[must_use]
    pub fn builder() -> MarketConfigBuilder {
        let defaults = Self::default();
        MarketConfigBuilder {
            buffer_size: defaults.buffer_size,
            seed_demo_data: defaults.seed_demo_data,
            log_filter: defaults.log_filter,
        }
    }

    /// Reads `MARKET_BUFFER_SIZE`, `MARKET_SEED_DEMO` and `MARKET_LOG`,
    /// keeping the builder default for any variable that is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(value) = lookup(ENV_BUFFER_SIZE) {
            let size = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_BUFFER_SIZE, value })?;
            builder = builder.buffer_size(size);
        }
        if let Some(value) = lookup(ENV_SEED_DEMO) {
            let seed = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidEnv { var: ENV_SEED_DEMO, value }),
            };
            builder = builder.seed_demo_data(seed);
        }
        if let Some(value) = lookup(ENV_LOG) {
            builder = builder.log_filter(value);
        }
        builder.build()
    }
}

impl MarketConfigBuilder {
    #[must_use]
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    #[must_use]
    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    #[must_use]
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `buffer_size` is zero or the log
    /// filter is blank.
    pub fn build(self) -> Result<MarketConfig, ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                reason: "buffer_size must be >= 1".to_owned(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "log_filter must not be empty".to_owned(),
            });
        }
        Ok(MarketConfig {
            buffer_size: self.buffer_size,
            seed_demo_data: self.seed_demo_data,
            log_filter: self.log_filter,
        })
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed_demo_data: true,
            log_filter: "info".to_owned(),
        }
    }
}
