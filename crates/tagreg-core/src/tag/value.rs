//! Tag parameter values.
//!
//! Serialized untagged, so manifests write plain scalars and sequences:
//! `requests: 100`, `ratio: 0.5`, `per: "minute"`, `roles: [admin, ops]`.
//! Integers outside the `i64` range are rejected on input instead of being
//! widened to `Float`.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One parameter value: string, number, or list of strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl TagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TagValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Float(f) => Some(*f),
            TagValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TagValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<i64> for TagValue {
    fn from(n: i64) -> Self {
        TagValue::Integer(n)
    }
}

impl From<i32> for TagValue {
    fn from(n: i32) -> Self {
        TagValue::Integer(n.into())
    }
}

impl From<f64> for TagValue {
    fn from(f: f64) -> Self {
        TagValue::Float(f)
    }
}

impl From<Vec<String>> for TagValue {
    fn from(items: Vec<String>) -> Self {
        TagValue::List(items)
    }
}

impl From<&[&str]> for TagValue {
    fn from(items: &[&str]) -> Self {
        TagValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<'de> Deserialize<'de> for TagValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TagValueVisitor)
    }
}

struct TagValueVisitor;

impl<'de> Visitor<'de> for TagValueVisitor {
    type Value = TagValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, an i64 integer, a float, or a list of strings")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<TagValue, E> {
        Ok(TagValue::Integer(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<TagValue, E> {
        i64::try_from(n)
            .map(TagValue::Integer)
            .map_err(|_| E::custom(format!("integer {n} out of range for i64")))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<TagValue, E> {
        Ok(TagValue::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<TagValue, E> {
        Ok(TagValue::Text(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<TagValue, E> {
        Ok(TagValue::Text(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TagValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<String>()? {
            items.push(item);
        }
        Ok(TagValue::List(items))
    }
}
