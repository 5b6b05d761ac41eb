//! Manifest loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use tagreg_core::error::{RegistryError, Result};

pub use schema::{EntityDecl, Manifest};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| RegistryError::Io(format!("read manifest {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(s)
        .map_err(|e| RegistryError::BadManifest(format!("invalid yaml: {e}")))?;
    manifest.validate()?;
    Ok(manifest)
}
