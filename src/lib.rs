//! Bootstrap configurator for a CMS installation.
//!
//! Reads database connection parameters from a local dev-environment
//! descriptor (a JSON document held in an environment variable),
//! assembles an immutable [`Settings`] value together with literal
//! defaults (charset, table prefix, authentication secrets, debug
//! flags), publishes it once process-wide, and transfers control to
//! the CMS runtime's entry point.

pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod observability;

pub use config::loader::load_settings;
pub use config::schema::Settings;
pub use lifecycle::handoff::Runtime;
pub use lifecycle::startup::BootstrapOpts;
