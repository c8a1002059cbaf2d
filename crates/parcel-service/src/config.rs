//! Service configuration from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `PARCEL_HOST` | `0.0.0.0` |
//! | `PARCEL_PORT` | `8000` |
//! | `PARCEL_MAILBOX_CAPACITY` | `32` |
//! | `PARCEL_ROUTES_FILE` | unset (built-in route table) |

use crate::routing::{RouteTableError, StaticRouteTable};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub mailbox_capacity: usize,
    pub routes_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            mailbox_capacity: 32,
            routes_file: None,
        }
    }
}

impl ServiceConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("PARCEL_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PARCEL_PORT") {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PARCEL_PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(capacity) = lookup("PARCEL_MAILBOX_CAPACITY") {
            config.mailbox_capacity = match capacity.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: "PARCEL_MAILBOX_CAPACITY",
                        value: capacity,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: "PARCEL_MAILBOX_CAPACITY",
                        value: capacity,
                        reason: e.to_string(),
                    })
                }
            };
        }
        config.routes_file = lookup("PARCEL_ROUTES_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// `host:port`, ready for a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured route table, or the built-in one.
    pub fn load_routes(&self) -> Result<StaticRouteTable, RouteTableError> {
        match &self.routes_file {
            Some(path) => StaticRouteTable::from_file(path),
            None => Ok(StaticRouteTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("PARCEL_HOST", "127.0.0.1"),
            ("PARCEL_PORT", "9090"),
            ("PARCEL_MAILBOX_CAPACITY", "4"),
            ("PARCEL_ROUTES_FILE", "/etc/parcel/routes.toml"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.mailbox_capacity, 4);
        assert_eq!(
            config.routes_file,
            Some(PathBuf::from("/etc/parcel/routes.toml"))
        );
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = ServiceConfig::from_lookup(lookup_from(&[("PARCEL_MAILBOX_CAPACITY", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "PARCEL_MAILBOX_CAPACITY",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let result = ServiceConfig::from_lookup(lookup_from(&[("PARCEL_PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "PARCEL_PORT",
                ..
            })
        ));
    }

    #[test]
    fn test_default_routes_without_file() {
        let routes = ServiceConfig::default().load_routes().unwrap();
        assert_eq!(routes.len(), 10);
    }
}
