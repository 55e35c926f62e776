//! Environment configuration.

use std::{net::SocketAddr, str::FromStr};

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub static DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";
pub static DEFAULT_INGREDIENTS_PATH: &str = "data/ingredients.json";
pub const DEFAULT_PASSWORD_HASH_ITERATIONS: u32 = 600_000;

/// Configuration of the `foodgram` server binary.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    /// Base URL used to build recipe short links
    pub public_url: String,
    pub password_hash_iterations: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: parsed("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            public_url: optional("PUBLIC_URL", DEFAULT_PUBLIC_URL)
                .trim_end_matches('/')
                .to_string(),
            password_hash_iterations: parsed(
                "PASSWORD_HASH_ITERATIONS",
                &DEFAULT_PASSWORD_HASH_ITERATIONS.to_string(),
            )?,
        })
    }
}

/// Configuration of the `load-ingredients` binary.
pub struct ImportConfig {
    pub database_url: String,
    pub ingredients_path: String,
}

impl ImportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            ingredients_path: optional("INGREDIENTS_PATH", DEFAULT_INGREDIENTS_PATH),
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parsed<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(var, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var,
            reason: e.to_string(),
        })
}
