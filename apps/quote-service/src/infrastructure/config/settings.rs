//! Service Configuration Settings
//!
//! Configuration types for the quote service, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Fixed seed for random selection. `None` seeds from the clock.
    pub rng_seed: Option<u64>,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `QUOTE_SERVICE_HOST` is set but is not an IP address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the host value is not an IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let host = match lookup("QUOTE_SERVICE_HOST") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse::<IpAddr>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "QUOTE_SERVICE_HOST".to_string(),
                        value: raw.clone(),
                    })?
            }
            _ => defaults.host,
        };

        let port = lookup("QUOTE_SERVICE_PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);

        let rng_seed = lookup("QUOTE_SERVICE_RNG_SEED").and_then(|v| v.trim().parse().ok());

        Ok(Self {
            server: ServerSettings { host, port },
            rng_seed,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be used.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}
