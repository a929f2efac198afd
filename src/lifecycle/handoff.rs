//! Control transfer to the CMS runtime.
//!
//! The bootstrap ends by invoking the runtime entry point under the
//! installation base path, with the published settings exported into
//! its environment. The exported variable names are the contract the
//! runtime reads; nothing else is passed.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::config::schema::Settings;

/// Runtime entry point, relative to the installation base path.
pub const RUNTIME_ENTRYPOINT: &str = "cms-runtime";

/// Error type for the hand-off step.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The runtime entry point could not be executed.
    #[error("failed to execute runtime entry point {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The runtime exited with a failure status. Only reachable on
    /// hosts where the hand-off cannot replace the bootstrap process.
    #[error("runtime entry point exited with status {status}")]
    RuntimeFailed { status: i32 },
}

/// Receives control from the bootstrap once settings are published.
pub trait Runtime {
    /// Transfer control to the runtime.
    ///
    /// The production implementation does not return on success on
    /// Unix hosts; the process image is replaced.
    fn transfer(&self, settings: &Settings) -> Result<(), HandoffError>;
}

/// Build the environment exported to the runtime entry point.
pub fn export_vars(settings: &Settings) -> Vec<(&'static str, String)> {
    vec![
        ("DB_NAME", settings.database.name.clone()),
        ("DB_USER", settings.database.user.clone()),
        ("DB_PASSWORD", settings.database.password.clone()),
        ("DB_HOST", settings.database.host.clone()),
        ("DB_CHARSET", settings.database.charset.clone()),
        ("DB_COLLATE", settings.database.collate.clone()),
        ("AUTH_KEY", settings.auth.auth_key.clone()),
        ("SECURE_AUTH_KEY", settings.auth.secure_auth_key.clone()),
        ("LOGGED_IN_KEY", settings.auth.logged_in_key.clone()),
        ("NONCE_KEY", settings.auth.nonce_key.clone()),
        ("AUTH_SALT", settings.auth.auth_salt.clone()),
        ("SECURE_AUTH_SALT", settings.auth.secure_auth_salt.clone()),
        ("LOGGED_IN_SALT", settings.auth.logged_in_salt.clone()),
        ("NONCE_SALT", settings.auth.nonce_salt.clone()),
        ("TABLE_PREFIX", settings.table_prefix.clone()),
        ("CMS_DEBUG", flag(settings.debug.runtime)),
        ("SCRIPT_DEBUG", flag(settings.debug.scripts)),
        ("BASE_PATH", settings.base_path.display().to_string()),
    ]
}

fn flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_string()
}

/// Production hand-off: executes the runtime entry point.
pub struct EntrypointExec;

impl Runtime for EntrypointExec {
    fn transfer(&self, settings: &Settings) -> Result<(), HandoffError> {
        let path = settings.base_path.join(RUNTIME_ENTRYPOINT);

        let mut command = Command::new(&path);
        command.envs(export_vars(settings));

        tracing::info!(
            entry_point = %path.display(),
            "Transferring control to runtime"
        );

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;

            // exec only returns on failure
            let source = command.exec();
            Err(HandoffError::Spawn { path, source })
        }

        #[cfg(not(unix))]
        {
            let status = command.status().map_err(|source| HandoffError::Spawn {
                path: path.clone(),
                source,
            })?;
            if status.success() {
                Ok(())
            } else {
                Err(HandoffError::RuntimeFailed {
                    status: status.code().unwrap_or(-1),
                })
            }
        }
    }
}
