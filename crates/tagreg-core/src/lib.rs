//! tagreg core: the tag data model, the metadata registry, and the error surface.
//!
//! Tags are plain data (a name plus typed parameters) attached to entities
//! identified by qualified name. This crate carries no I/O or runtime
//! dependencies; loading tags from manifests lives in `tagreg-loader`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `RegistryError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod registry;
pub mod tag;

/// Shared result type.
pub use error::{ErrorCode, RegistryError, Result};
pub use registry::{Entity, Registry};
pub use tag::{Tag, TagValue};
