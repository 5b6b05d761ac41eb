//! tagreg CLI
//!
//! - Load + validate the tag manifest (strict YAML)
//! - Initialize the registry once
//! - Answer one query as JSON on stdout

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tagreg_loader::cli::{self, Cli};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let registry = match tagreg_loader::initialize_from_file(&args.manifest) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), manifest = %args.manifest.display(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli::render(&registry, &args.command) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            ExitCode::FAILURE
        }
    }
}
