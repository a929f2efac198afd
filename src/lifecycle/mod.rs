//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Validate → Publish once → Hand off
//!
//! Hand-off (handoff.rs):
//!     Resolve entry point under base path
//!     → export settings into its environment
//!     → exec (control transfer, no return on success)
//! ```
//!
//! # Design Decisions
//! - Ordered startup: settings first, hand-off last
//! - No shutdown path: once control transfers, the runtime owns the
//!   process
//! - The runtime behind the hand-off is a trait so the sequence can be
//!   exercised without spawning

pub mod handoff;
pub mod startup;
