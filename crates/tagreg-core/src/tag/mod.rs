//! Tags: a name plus typed parameters, the data form of an annotation.
//!
//! A `Tag` is built once (`Tag::new(..).with_param(..)`) and never mutated
//! afterwards. Parameter keys are map keys, so they are unique within a tag.
//! Name validity is checked at registration, not at construction, so the
//! registry is the single place that rejects malformed tags.

pub mod value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use value::TagValue;

/// Declarative tag attached to an entity (e.g. `Metric { name: "user.creation" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    name: String,
    /// Parameters keyed by name (field is `params` in manifests and JSON).
    #[serde(rename = "params", default)]
    params: BTreeMap<String, TagValue>,
}

impl Tag {
    /// Tag with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Builder step. A repeated key replaces the earlier value.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &BTreeMap<String, TagValue> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&TagValue> {
        self.params.get(key)
    }

    /// Registrable tags have a non-empty name. Whitespace counts as content.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_replaces_value() {
        let tag = Tag::new("RateLimit")
            .with_param("requests", 10)
            .with_param("requests", 100);
        assert_eq!(tag.params().len(), 1);
        assert_eq!(tag.param("requests").and_then(TagValue::as_i64), Some(100));
    }

    #[test]
    fn only_the_empty_name_is_invalid() {
        assert!(!Tag::new("").is_valid());
        assert!(Tag::new("  ").is_valid());
        assert!(Tag::new("Metric").is_valid());
    }
}
