//! Command-line surface over an initialized registry.
//!
//! Rendering is separated from `main` so commands can be exercised in tests
//! without spawning the binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tagreg_core::error::{RegistryError, Result};
use tagreg_core::{Registry, Tag};

#[derive(Debug, Parser)]
#[command(name = "tagreg", version, about = "Query tags declared in a tag manifest")]
pub struct Cli {
    /// Path to the YAML tag manifest.
    #[arg(short, long, default_value = "tagreg.yaml")]
    pub manifest: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print all tags of one entity, in declaration order.
    Lookup { entity: String },
    /// Print every (entity, tag) pair carrying the given tag name.
    Find { tag: String },
    /// Print every entity with its tag count.
    List,
}

#[derive(Serialize)]
struct FindHit<'a> {
    entity: &'a str,
    tag: &'a Tag,
}

#[derive(Serialize)]
struct EntitySummary<'a> {
    entity: &'a str,
    tags: usize,
}

/// Run `command` against `registry` and return pretty JSON.
pub fn render(registry: &Registry, command: &Command) -> Result<String> {
    match command {
        Command::Lookup { entity } => to_json(&registry.lookup(entity)),
        Command::Find { tag } => {
            let hits: Vec<FindHit<'_>> = registry
                .find_by_tag_name(tag)
                .into_iter()
                .map(|(entity, tag)| FindHit { entity, tag })
                .collect();
            to_json(&hits)
        }
        Command::List => {
            let rows: Vec<EntitySummary<'_>> = registry
                .entities()
                .map(|e| EntitySummary {
                    entity: e.id(),
                    tags: e.tags().len(),
                })
                .collect();
            to_json(&rows)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| RegistryError::Internal(format!("encode output failed: {e}")))
}
