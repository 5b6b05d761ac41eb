//! tagreg loader library entry.
//!
//! Parses YAML tag manifests and turns them into a read-only
//! `tagreg_core::Registry`. Consumed by the `tagreg` binary and by
//! integration tests.

pub mod cli;
pub mod config;
pub mod init;

pub use init::{initialize, initialize_from_file};
