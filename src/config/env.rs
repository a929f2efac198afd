//! Dev-environment descriptor parsing.
//!
//! The local development environment publishes its service topology as
//! a JSON document in a single environment variable. Only the database
//! service is consumed here; every other key in the payload is ignored.

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the dev-environment descriptor.
///
/// This is the entire configurable-input surface of the bootstrap.
pub const ENV_VAR: &str = "LANDO_INFO";

/// Parsed dev-environment descriptor.
///
/// Constructed once at process start, read once, then discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvDescriptor {
    pub database: DatabaseService,
}

/// The database service entry of the descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseService {
    pub creds: DatabaseCreds,
    pub internal_connection: InternalConnection,
}

/// Database credentials as provisioned by the dev environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCreds {
    pub database: String,
    pub user: String,
    pub password: String,
}

/// Connection details reachable from inside the dev environment.
#[derive(Debug, Clone, Deserialize)]
pub struct InternalConnection {
    pub host: String,
}

/// Error type for descriptor access.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The descriptor variable is not set in the process environment.
    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },

    /// The descriptor variable holds non-unicode data.
    #[error("environment variable {var} is not valid UTF-8")]
    NotUnicode { var: &'static str },

    /// The payload is not valid JSON or lacks a required field.
    #[error("environment variable {var} does not hold a valid descriptor: {source}")]
    Parse {
        var: &'static str,
        source: serde_json::Error,
    },
}

impl EnvDescriptor {
    /// Read and parse the descriptor from the fixed environment variable.
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_var(ENV_VAR)
    }

    /// Read and parse the descriptor from a named environment variable.
    pub fn from_var(var: &'static str) -> Result<Self, EnvError> {
        let raw = match std::env::var(var) {
            Ok(raw) => raw,
            Err(std::env::VarError::NotPresent) => return Err(EnvError::Missing { var }),
            Err(std::env::VarError::NotUnicode(_)) => return Err(EnvError::NotUnicode { var }),
        };
        Self::from_json(&raw).map_err(|source| EnvError::Parse { var, source })
    }

    /// Parse a descriptor from a raw JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
