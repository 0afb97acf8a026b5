//! sprout.toml parsing and validation.
//!
//! [`Manifest`] mirrors the file; [`ProjectDescription`] is the validated
//! manifest with defaults applied that project generation consumes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod description;
mod error;
mod file;
mod manifest;
mod parse;
mod starter;
mod validate;

pub use description::ProjectDescription;
pub use error::{Error, Result, SourceContext};
pub use file::SproutToml;
pub use manifest::{
    DEFAULT_DESCRIPTION, DEFAULT_PLATFORM_VERSION, DependencyConfig, IndentConfig, LinkConfig,
    Manifest, ProjectConfig,
};
pub use parse::{MANIFEST_FILE, parse_manifest};
pub use starter::StarterManifest;
