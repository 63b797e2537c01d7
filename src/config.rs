//! Host configuration.
//!
//! DESIGN
//! ======
//! Leptos options (output name, site root, default address) come from
//! `cargo-leptos` metadata. The environment may override the listening port
//! with `PORT`, binding on all interfaces like a container deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {value:?}: {source}")]
    Port {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Everything the host needs to start serving.
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub leptos_options: LeptosOptions,
    pub site_addr: SocketAddr,
}

impl HostConfig {
    /// Load Leptos options and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or
    /// `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let site_addr = resolve_site_addr(leptos_options.site_addr, |key| std::env::var(key).ok())?;
        Ok(Self { leptos_options, site_addr })
    }
}

/// `PORT` (if set and non-blank) wins over the configured address.
///
/// # Errors
///
/// Returns [`ConfigError::Port`] when `PORT` does not parse as a `u16`.
pub fn resolve_site_addr<F>(configured: SocketAddr, lookup: F) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup("PORT").filter(|v| !v.trim().is_empty()) else {
        return Ok(configured);
    };
    let port = raw
        .trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::Port { value: raw.clone(), source })?;
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}
