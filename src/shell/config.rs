// Runtime configuration, read from the process environment.
//
// A `.env` file in the working directory is loaded first when present.

use std::num::ParseIntError;

use axum::http::HeaderValue;
use thiserror::Error;

pub const HOST_VAR: &str = "POSTS_API_HOST";
pub const PORT_VAR: &str = "POSTS_API_PORT";
pub const ALLOWED_ORIGINS_VAR: &str = "POSTS_API_ALLOWED_ORIGINS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:4200",
    "http://localhost:4200",
    "http://127.0.0.1:3000",
    "http://localhost:3000",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("POSTS_API_PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("POSTS_API_ALLOWED_ORIGINS lists no origins")]
    NoAllowedOrigins,

    #[error("POSTS_API_ALLOWED_ORIGINS contains an invalid origin {value:?}")]
    InvalidOrigin { value: String },

    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = match lookup(ALLOWED_ORIGINS_VAR) {
            Some(raw) => parse_origins(raw.split(','))?,
            None => parse_origins(DEFAULT_ALLOWED_ORIGINS)?,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins<'a>(
    origins: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<HeaderValue>, ConfigError> {
    let parsed = origins
        .into_iter()
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if parsed.is_empty() {
        return Err(ConfigError::NoAllowedOrigins);
    }
    Ok(parsed)
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.allowed_origins.len(), 4);
        assert_eq!(config.allowed_origins[1], "http://localhost:4200");
    }

    #[rstest]
    fn it_should_read_overrides() {
        let config = Config::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
            (ALLOWED_ORIGINS_VAR, "https://a.example, https://b.example,"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("70000")]
    #[case("")]
    fn it_should_reject_an_invalid_port(#[case] port: &str) {
        let result = Config::from_lookup(lookup(&[(PORT_VAR, port)]));
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[rstest]
    fn it_should_reject_an_empty_origin_list() {
        let result = Config::from_lookup(lookup(&[(ALLOWED_ORIGINS_VAR, " , ")]));
        assert!(matches!(result, Err(ConfigError::NoAllowedOrigins)));
    }

    #[rstest]
    fn it_should_reject_an_origin_that_is_not_a_header_value() {
        let result = Config::from_lookup(lookup(&[(ALLOWED_ORIGINS_VAR, "http://bad\norigin")]));
        assert!(matches!(result, Err(ConfigError::InvalidOrigin { .. })));
    }
}
