//! Top-level facade crate for tagreg.
//!
//! Re-exports the registry core and the manifest loader so users can depend on a single crate.

pub mod core {
    pub use tagreg_core::*;
}

pub mod loader {
    pub use tagreg_loader::*;
}

pub use tagreg_core::{Registry, RegistryError, Result, Tag, TagValue};
pub use tagreg_loader::{initialize, initialize_from_file};
