//! One-time process-wide settings publication.
//!
//! Downstream code reads the published settings for the lifetime of
//! the process; nothing re-mutates them after publication.

use std::sync::OnceLock;

use thiserror::Error;

use crate::config::schema::Settings;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Error type for settings publication.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Settings were already published earlier in this process.
    ///
    /// Carries the rejected value so the caller can inspect it.
    #[error("settings already published for this process")]
    AlreadyPublished(Settings),
}

/// Publish settings for the lifetime of the process.
///
/// Succeeds at most once; any later call fails and leaves the
/// originally published value untouched.
pub fn publish(settings: Settings) -> Result<(), PublishError> {
    SETTINGS.set(settings).map_err(PublishError::AlreadyPublished)
}

/// The settings published for this process, if any.
pub fn published() -> Option<&'static Settings> {
    SETTINGS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::EnvDescriptor;
    use std::path::PathBuf;

    fn settings(name: &str) -> Settings {
        let raw = format!(
            r#"{{"database":{{"creds":{{"database":"{name}","user":"u1","password":"p1"}},"internal_connection":{{"host":"h1"}}}}}}"#
        );
        let descriptor = EnvDescriptor::from_json(&raw).unwrap();
        Settings::from_descriptor(&descriptor, PathBuf::from("/srv/site"))
    }

    // A single test exercises the whole lifecycle: the cell is global
    // to the test binary, so publication can only be observed once.
    #[test]
    fn test_publish_succeeds_once_then_fails() {
        assert!(published().is_none());

        publish(settings("first")).unwrap();
        assert_eq!(published().unwrap().database.name, "first");

        let err = publish(settings("second")).unwrap_err();
        let PublishError::AlreadyPublished(rejected) = err;
        assert_eq!(rejected.database.name, "second");

        // The original publication is untouched.
        assert_eq!(published().unwrap().database.name, "first");
    }
}
