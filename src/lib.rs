//! NEO impact energy estimation.
//!
//! The workspace is split into small crates; this facade re-exports them so
//! front-ends (CLI, web handlers, tests) depend on a single library.

pub use neo_assessment as assessment;
pub use neo_catalog as catalog;
pub use neo_config as config;
pub use neo_core::{constants, geometry, units};
pub use neo_export as export;
pub use neo_impact as impact;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
