use std::{env, fmt, net::SocketAddr};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// No limit unless `MAX_BODY_BYTES` is set.
pub const DEFAULT_MAX_BODY_BYTES: usize = usize::MAX;

// ============================================================================
// CONFIGURATION - Read once at startup from the environment (and `.env`)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// `BIND_ADDR` and `MAX_BODY_BYTES`; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "MAX_BODY_BYTES",
                value: raw,
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            max_body_bytes,
        })
    }
}
