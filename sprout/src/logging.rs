//! Tracing subscriber setup.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! `RUST_LOG` overrides the flags when set.

use std::io::IsTerminal as _;

use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::GlobalArgs;

/// Install the global subscriber, writing to stderr.
pub fn init_logging(args: &GlobalArgs) -> Result<()> {
    let level = derive_level(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| eyre!("failed to initialise tracing: {e}"))
}

/// Workspace crates whose events are shown without `RUST_LOG`.
const CRATES: &[&str] = &[
    "sprout",
    "sprout_core",
    "sprout_manifest",
    "sprout_codegen",
    "sprout_codegen_maven",
    "sprout_codegen_gradle",
    "sprout_codegen_jvm",
    "sprout_project",
];

fn default_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
