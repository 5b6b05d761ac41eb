//! Metadata registry: entity id -> ordered tags.
//!
//! Write-once, read-many. Tags are registered during initialization through
//! `&mut self`; afterwards the registry is handed out as `Arc<Registry>`, and
//! readers on any thread share it without locking.
//!
//! Entities iterate in first-registration order. An entity's tags iterate in
//! registration order, duplicates by name included (stacked annotations).

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::tag::Tag;

/// One registered entity and its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: String,
    tags: Vec<Tag>,
}

impl Entity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Registry of entities and their tags.
#[derive(Debug, Default)]
pub struct Registry {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` to `entity_id`, creating the entity if absent.
    /// A tag with an empty name is rejected and the registry is left untouched.
    /// Any entity id is accepted, including `""`; the manifest loader applies
    /// its own id rules before calling in.
    pub fn register(&mut self, entity_id: &str, tag: Tag) -> Result<()> {
        if !tag.is_valid() {
            warn!(entity = entity_id, "rejected tag with empty name");
            return Err(RegistryError::InvalidTag {
                entity: entity_id.to_string(),
            });
        }

        debug!(entity = entity_id, tag = tag.name(), "register tag");

        let slot = self.slot(entity_id);
        self.entities[slot].tags.push(tag);
        Ok(())
    }

    /// Make `entity_id` known without attaching a tag. No-op if present.
    /// A declared entity shows up in `entities()` and `contains()`; its
    /// `lookup` is empty until tags are registered.
    pub fn declare(&mut self, entity_id: &str) {
        self.slot(entity_id);
    }

    fn slot(&mut self, entity_id: &str) -> usize {
        if let Some(i) = self.index.get(entity_id).copied() {
            return i;
        }
        debug!(entity = entity_id, "declare entity");
        let i = self.entities.len();
        self.entities.push(Entity {
            id: entity_id.to_string(),
            tags: Vec::new(),
        });
        self.index.insert(entity_id.to_string(), i);
        i
    }

    /// Tags of `entity_id` in registration order; empty if unknown.
    pub fn lookup(&self, entity_id: &str) -> &[Tag] {
        self.index
            .get(entity_id)
            .and_then(|&i| self.entities.get(i))
            .map(|e| e.tags.as_slice())
            .unwrap_or(&[])
    }

    /// Every `(entity id, tag)` pair whose tag is named `name`, in entity
    /// order then tag order. Linear scan.
    pub fn find_by_tag_name(&self, name: &str) -> Vec<(&str, &Tag)> {
        self.entities
            .iter()
            .flat_map(move |e| {
                e.tags
                    .iter()
                    .filter(move |t| t.name() == name)
                    .map(move |t| (e.id.as_str(), t))
            })
            .collect()
    }

    /// Entities in first-registration order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.index.contains_key(entity_id)
    }

    /// Number of entities (not tags).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
