use std::collections::HashSet;

use serde::Deserialize;
use tagreg_core::error::{RegistryError, Result};
use tagreg_core::Tag;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub version: u32,

    #[serde(default)]
    pub entities: Vec<EntityDecl>,
}

impl Manifest {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RegistryError::UnsupportedVersion(self.version));
        }

        let mut seen = HashSet::with_capacity(self.entities.len());
        for e in &self.entities {
            if e.id.trim().is_empty() {
                return Err(RegistryError::BadManifest("entity id must not be empty".into()));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(RegistryError::BadManifest(format!(
                    "duplicate entity id: {}",
                    e.id
                )));
            }
        }

        // Tag names are checked by the registry during initialization.
        Ok(())
    }

    /// Total tags across all entities.
    pub fn tag_count(&self) -> usize {
        self.entities.iter().map(|e| e.tags.len()).sum()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDecl {
    /// Qualified name of the annotated method/function.
    pub id: String,
    /// Tags in declaration order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}
