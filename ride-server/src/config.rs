//! Server configuration from the environment.
//!
//! | Variable           | Default          |
//! |--------------------|------------------|
//! | `RIDE_BIND_ADDR`   | `127.0.0.1:3000` |
//! | `RIDE_STATIC_DIR`  | `static`         |
//! | `MAPTILER_API_KEY` | unset (no routes)|
//! | `RIDE_RNG_SEED`    | unset (entropy)  |

use std::net::SocketAddr;
use std::str::FromStr;

use tracing::{info, warn};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Error for an environment variable that is set but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    /// MapTiler key for route lookups; `None` disables them.
    pub maptiler_api_key: Option<String>,
    /// Seed for recommendation randomness; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or("RIDE_BIND_ADDR", DEFAULT_BIND_ADDR, &lookup)?;

        let static_dir = lookup("RIDE_STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let maptiler_api_key = lookup("MAPTILER_API_KEY").filter(|s| !s.trim().is_empty());
        if maptiler_api_key.is_none() {
            warn!("MAPTILER_API_KEY not set, route information will be unavailable");
        }

        let rng_seed = match lookup("RIDE_RNG_SEED").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(parse_value("RIDE_RNG_SEED", &raw)?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            maptiler_api_key,
            rng_seed,
        })
    }
}

fn parse_or<T, F>(key: &'static str, default: &str, lookup: &F) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse_value(key, &raw)
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
