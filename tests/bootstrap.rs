//! Integration tests for the bootstrap sequence.

use std::path::PathBuf;
use std::sync::Mutex;

use serial_test::serial;

use cms_bootstrap::config::env::ENV_VAR;
use cms_bootstrap::config::loader::load_settings;
use cms_bootstrap::lifecycle::handoff::{HandoffError, Runtime};
use cms_bootstrap::lifecycle::startup::{run, BootstrapOpts};
use cms_bootstrap::Settings;

const DESCRIPTOR: &str = r#"{"database":{"creds":{"database":"db1","user":"u1","password":"p1"},"internal_connection":{"host":"h1"}}}"#;

/// Runtime double that records every transfer instead of exec'ing.
#[derive(Default)]
struct RecordingRuntime {
    transfers: Mutex<Vec<Settings>>,
}

impl RecordingRuntime {
    fn transfer_count(&self) -> usize {
        self.transfers.lock().unwrap().len()
    }
}

impl Runtime for RecordingRuntime {
    fn transfer(&self, settings: &Settings) -> Result<(), HandoffError> {
        self.transfers.lock().unwrap().push(settings.clone());
        Ok(())
    }
}

#[test]
#[serial]
fn test_bootstrap_hands_off_once_with_database_settings() {
    std::env::set_var(ENV_VAR, DESCRIPTOR);
    let base = tempfile::tempdir().unwrap();

    let runtime = RecordingRuntime::default();
    let opts = BootstrapOpts {
        base_path: Some(base.path().to_path_buf()),
    };
    run(opts, &runtime).unwrap();

    let transfers = runtime.transfers.lock().unwrap();
    assert_eq!(transfers.len(), 1);

    let settings = &transfers[0];
    assert_eq!(settings.database.name, "db1");
    assert_eq!(settings.database.user, "u1");
    assert_eq!(settings.database.password, "p1");
    assert_eq!(settings.database.host, "h1");
    assert_eq!(settings.database.charset, "utf8");
    assert_eq!(settings.table_prefix, "cms_");
    assert!(settings.debug.runtime);
    assert!(settings.debug.scripts);
    assert_eq!(settings.base_path, base.path());

    // Downstream readers see the same published value.
    let published = cms_bootstrap::constants::published().unwrap();
    assert_eq!(published.database.name, "db1");

    std::env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn test_missing_descriptor_fails_before_handoff() {
    std::env::remove_var(ENV_VAR);

    let runtime = RecordingRuntime::default();
    let err = run(BootstrapOpts::default(), &runtime).unwrap_err();

    assert!(err.to_string().contains("LANDO_INFO"));
    assert_eq!(runtime.transfer_count(), 0);
}

#[test]
#[serial]
fn test_malformed_descriptor_fails_before_handoff() {
    std::env::set_var(ENV_VAR, "{ not json");

    let runtime = RecordingRuntime::default();
    let err = run(BootstrapOpts::default(), &runtime).unwrap_err();

    assert!(err.to_string().contains("LANDO_INFO"));
    assert_eq!(runtime.transfer_count(), 0);

    std::env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn test_missing_nested_field_names_the_field() {
    std::env::set_var(
        ENV_VAR,
        r#"{"database":{"creds":{"database":"db1","user":"u1"},"internal_connection":{"host":"h1"}}}"#,
    );

    let err = load_settings(None).unwrap_err();
    assert!(err.to_string().contains("password"));

    std::env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn test_base_path_defaults_to_working_directory() {
    std::env::set_var(ENV_VAR, DESCRIPTOR);

    let settings = load_settings(None).unwrap();
    assert_eq!(settings.base_path, std::env::current_dir().unwrap());

    let settings = load_settings(Some(PathBuf::from("/srv/site"))).unwrap();
    assert_eq!(settings.base_path, PathBuf::from("/srv/site"));

    std::env::remove_var(ENV_VAR);
}
