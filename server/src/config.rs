//! Process configuration read from the environment.
//!
//! The Functions host tells a custom handler which port to listen on through
//! `FUNCTIONS_CUSTOMHANDLER_PORT`. `PORT` is honoured when running the binary
//! on its own.

use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ROUTE_PREFIX: &str = "api";

const CUSTOM_HANDLER_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
const PORT_VAR: &str = "PORT";
const ROUTE_PREFIX_VAR: &str = "HTTP_EXAMPLE_ROUTE_PREFIX";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub route_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = [CUSTOM_HANDLER_PORT_VAR, PORT_VAR]
            .into_iter()
            .find_map(|var| lookup(var).map(|value| (var, value)))
            .map(|(var, value)| parse_port(var, &value))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let route_prefix =
            lookup(ROUTE_PREFIX_VAR).unwrap_or_else(|| DEFAULT_ROUTE_PREFIX.to_string());

        Ok(Self { port, route_prefix })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.route_prefix, "api");
    }

    #[test]
    fn custom_handler_port_wins_over_port() {
        let config = Config::from_lookup(lookup_in(&[
            ("FUNCTIONS_CUSTOMHANDLER_PORT", "7071"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.port, 7071);
    }

    #[test]
    fn falls_back_to_port() {
        let config = Config::from_lookup(lookup_in(&[("PORT", " 8080 ")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = Config::from_lookup(lookup_in(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "http")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: "FUNCTIONS_CUSTOMHANDLER_PORT",
                value: "http".to_string(),
            }
        );
        assert_eq!(err.to_string(), "FUNCTIONS_CUSTOMHANDLER_PORT is not a valid port: \"http\"");
    }

    #[test]
    fn empty_route_prefix_is_kept() {
        let config = Config::from_lookup(lookup_in(&[("HTTP_EXAMPLE_ROUTE_PREFIX", "")])).unwrap();
        assert_eq!(config.route_prefix, "");
    }
}
