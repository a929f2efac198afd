//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate settings
//! - Publish them process-wide, exactly once
//! - Hand control to the runtime entry point
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order, not concurrently
//! - Hand-off is last (control leaves only when fully configured)

use std::path::PathBuf;

use thiserror::Error;

use crate::config::loader::{load_settings, ConfigError};
use crate::constants::{self, PublishError};
use crate::lifecycle::handoff::{HandoffError, Runtime};

/// Options controlling a bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOpts {
    /// Explicit base path; the working directory is used when absent.
    pub base_path: Option<PathBuf>,
}

/// Error type for the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Settings could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Settings were already published in this process.
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Control could not be transferred to the runtime.
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Run the bootstrap sequence and hand control to the given runtime.
///
/// The sequence is load → validate → publish → hand off. Any error
/// aborts it immediately; there is no retry and no fallback value.
pub fn run(opts: BootstrapOpts, runtime: &dyn Runtime) -> Result<(), BootstrapError> {
    let settings = load_settings(opts.base_path)?;

    tracing::info!(
        database = %settings.database.name,
        host = %settings.database.host,
        table_prefix = %settings.table_prefix,
        base_path = %settings.base_path.display(),
        "Settings loaded"
    );

    constants::publish(settings.clone())?;

    runtime.transfer(&settings)?;

    Ok(())
}
