//! Process configuration, read from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::Error;

pub const DEFAULT_PORT: u16 = 3000;

/// Where to listen and where the site's files live.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Root of the JSON data documents.
    pub data_dir: PathBuf,
    /// Root of the static assets (CSS, images, scripts).
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `DATA_DIR` and `PUBLIC_DIR`; unset or empty
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = var("HOST") {
            config.host = host.trim().parse().map_err(|_| Error::Config {
                message: format!("HOST must be an IP address, got `{host}`"),
            })?;
        }
        if let Some(port) = var("PORT") {
            config.port = port.trim().parse().map_err(|_| Error::Config {
                message: format!("PORT must be a number between 0 and 65535, got `{port}`"),
            })?;
        }
        if let Some(dir) = var("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var("PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn port_defaults_to_3000() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn empty_port_counts_as_unset() {
        let config = Config::from_lookup(lookup(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATA_DIR", "/srv/site/data"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("/srv/site/data"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn rejects_garbage_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
