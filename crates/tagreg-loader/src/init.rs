//! Registry initialization.
//!
//! Runs once at startup, before any lookup: every declared tag is registered
//! in manifest order, then the registry is frozen behind an `Arc`. Holders of
//! the `Arc` can only read.

use std::path::Path;
use std::sync::Arc;

use tagreg_core::error::Result;
use tagreg_core::Registry;

use crate::config::{self, Manifest};

/// Build the registry from a validated manifest.
/// Returns Result so the host can fail startup cleanly on a bad tag.
pub fn initialize(manifest: &Manifest) -> Result<Arc<Registry>> {
    let mut registry = Registry::new();

    for entity in &manifest.entities {
        // Declared first so tagless entities are still listed.
        registry.declare(&entity.id);
        for tag in &entity.tags {
            registry.register(&entity.id, tag.clone())?;
        }
    }

    tracing::info!(
        entities = registry.len(),
        tags = manifest.tag_count(),
        "tag registry initialized"
    );
    Ok(Arc::new(registry))
}

/// Load, validate, and initialize in one step.
pub fn initialize_from_file(path: impl AsRef<Path>) -> Result<Arc<Registry>> {
    let manifest = config::load_from_file(path)?;
    initialize(&manifest)
}
