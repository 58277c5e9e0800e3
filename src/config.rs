//! Process configuration read from the environment.
//!
//! Only the listen sockets are configurable. Cluster access follows the
//! standard kubeconfig / in-cluster resolution of `kube::Client::try_default`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_METRICS_PORT: u16 = 9090;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// IP both servers bind to (`BIND_ADDRESS`)
    pub bind_address: IpAddr,
    /// Gateway port (`PORT`)
    pub port: u16,
    /// Health and metrics port (`METRICS_PORT`)
    pub metrics_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            metrics_port: DEFAULT_METRICS_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            bind_address: parse_var(&lookup, "BIND_ADDRESS")?.unwrap_or(defaults.bind_address),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            metrics_port: parse_var(&lookup, "METRICS_PORT")?.unwrap_or(defaults.metrics_port),
        };
        if config.port == config.metrics_port {
            return Err(Error::InvalidConfig(format!(
                "PORT and METRICS_PORT must differ, both are {}",
                config.port
            )));
        }
        Ok(config)
    }

    pub fn gateway_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn metrics_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.metrics_port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::InvalidConfig(format!("{key}={raw}: {e}"))),
        _ => Ok(None),
    }
}
