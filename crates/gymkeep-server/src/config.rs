use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("GYMKEEP_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("GYMKEEP_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let db_path = match lookup("GYMKEEP_DB_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Invalid("GYMKEEP_DB_PATH", "must not be empty"));
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("./gymkeep.redb"),
        };

        Ok(Config {
            listen_addr,
            db_path,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
