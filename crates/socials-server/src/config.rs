//! Server configuration from environment variables.
//!
//! `SOCIALS_ENV_STATE` (`dev`, `prod` or `test`, default `dev`) selects the
//! prefix of environment-scoped variables and the defaults:
//!
//! | state  | backend default | database path variable | path default      |
//! |--------|-----------------|------------------------|-------------------|
//! | `dev`  | sqlite          | `DEV_DATABASE_PATH`    | `socials_dev.db`  |
//! | `prod` | sqlite          | `PROD_DATABASE_PATH`   | `socials.db`      |
//! | `test` | memory          | `TEST_DATABASE_PATH`   | none              |
//!
//! `SOCIALS_BACKEND` (`memory` or `sqlite`) overrides the backend,
//! `SOCIALS_HOST` and `SOCIALS_PORT` set the listen address
//! (default `0.0.0.0:3000`).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors. Each names the offending variable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SOCIALS_ENV_STATE '{0}': must be \"dev\", \"prod\", or \"test\"")]
    InvalidEnvState(String),

    #[error("invalid SOCIALS_BACKEND '{0}': must be \"memory\" or \"sqlite\"")]
    InvalidBackend(String),

    #[error("invalid SOCIALS_PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("sqlite backend selected but {0} is not set")]
    MissingDatabasePath(String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvState {
    Dev,
    Prod,
    Test,
}

impl EnvState {
    /// Prefix of this environment's scoped variables.
    fn prefix(self) -> &'static str {
        match self {
            EnvState::Dev => "DEV_",
            EnvState::Prod => "PROD_",
            EnvState::Test => "TEST_",
        }
    }

    fn default_database_path(self) -> Option<&'static str> {
        match self {
            EnvState::Dev => Some("socials_dev.db"),
            EnvState::Prod => Some("socials.db"),
            EnvState::Test => None,
        }
    }
}

impl FromStr for EnvState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(EnvState::Dev),
            "prod" => Ok(EnvState::Prod),
            "test" => Ok(EnvState::Test),
            _ => Err(ConfigError::InvalidEnvState(s.to_string())),
        }
    }
}

impl fmt::Display for EnvState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvState::Dev => write!(f, "dev"),
            EnvState::Prod => write!(f, "prod"),
            EnvState::Test => write!(f, "test"),
        }
    }
}

/// Which storage backend the service runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Sqlite { path: String },
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Sqlite { path } => write!(f, "sqlite({})", path),
        }
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub env_state: EnvState,
    pub backend: Backend,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_state = match lookup("SOCIALS_ENV_STATE") {
            Some(raw) => raw.parse()?,
            None => {
                tracing::info!("SOCIALS_ENV_STATE not set, using default: dev");
                EnvState::Dev
            }
        };

        let path_var = format!("{}DATABASE_PATH", env_state.prefix());
        let path = lookup(&path_var)
            .or_else(|| env_state.default_database_path().map(str::to_string));

        let wants_sqlite = match lookup("SOCIALS_BACKEND") {
            Some(raw) => {
                let normalized = raw.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    "memory" => false,
                    "sqlite" => true,
                    _ => return Err(ConfigError::InvalidBackend(raw)),
                }
            }
            None => env_state != EnvState::Test,
        };

        let backend = if wants_sqlite {
            let path = path.ok_or(ConfigError::MissingDatabasePath(path_var))?;
            Backend::Sqlite { path }
        } else {
            Backend::Memory
        };

        let host = lookup("SOCIALS_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("SOCIALS_PORT") {
            Some(value) => {
                let parsed = value.trim().parse::<u16>();
                parsed.map_err(|source| ConfigError::InvalidPort { value, source })?
            }
            None => 3000,
        };

        Ok(ServerConfig {
            env_state,
            backend,
            host,
            port,
        })
    }

    /// `host:port` to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
