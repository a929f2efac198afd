//! Settings loading from the process environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::env::{EnvDescriptor, EnvError};
use crate::config::schema::Settings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment descriptor could not be read or parsed.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// The assembled settings failed semantic validation.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate settings for this installation.
///
/// Fail-fast: the first failing stage aborts the load, so no partially
/// assembled settings ever escape.
pub fn load_settings(base_path: Option<PathBuf>) -> Result<Settings, ConfigError> {
    let descriptor = EnvDescriptor::from_env()?;
    let settings = Settings::from_descriptor(&descriptor, resolve_base_path(base_path));

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}

/// Resolve the installation base path.
///
/// An explicit override wins; otherwise the process working directory.
/// Resolution is stable: the same input always yields the same path.
pub fn resolve_base_path(override_path: Option<PathBuf>) -> PathBuf {
    match override_path {
        Some(path) => path,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
