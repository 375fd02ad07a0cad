//! Host configuration from environment variables.
//!
//! DESIGN
//! ======
//! Every knob has a default so a bare `cargo leptos serve` works. Values that
//! are set but unparsable are rejected instead of silently replaced, so a
//! typo in `PORT` fails at startup rather than binding somewhere unexpected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Overrides the Leptos `site-root` (where `/pkg` assets are read from).
    pub site_root: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR, site_root: None }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` or `BIND_ADDR` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            bind_addr: env_parse(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            site_root: lookup("SITE_ROOT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Parse `key` with a default for missing or blank values.
fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw })
        }
        _ => Ok(default),
    }
}
