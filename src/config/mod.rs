//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (LANDO_INFO, JSON payload)
//!     → env.rs (read & deserialize the descriptor)
//!     → schema.rs (assemble Settings from descriptor + literal defaults)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → published once, then exported to the runtime entry point
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; the descriptor is read once
//!   per process and discarded
//! - Required descriptor fields have no defaults so a missing field
//!   fails the parse with a message naming it
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::EnvDescriptor;
pub use schema::AuthKeys;
pub use schema::DatabaseSettings;
pub use schema::Settings;
