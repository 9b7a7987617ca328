//! Public surface for the Nexus ecosystem.
//!
//! This crate re-exports the building blocks and provides a small logging
//! helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use nexus_app as app;
pub use nexus_catalog as catalog;
/// Re-export for convenience.
pub use nexus_chat as chat;
pub use nexus_config as config;
/// Re-export for convenience.
pub use nexus_genai as genai;
pub use nexus_protocol as protocol;
pub use nexus_sim as sim;

/// Initialize logging using env_logger.
///
/// Safe to call more than once; later calls are no-ops.
#[inline]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
