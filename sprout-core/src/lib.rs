//! Core utilities and types for the sprout project generator.
//!
//! This crate provides fundamental types and utilities used across
//! the sprout workspace.

mod file;
mod indent;
mod types;
mod utils;
mod version;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file, write_with_rules};
// Fundamental types
pub use indent::Indent;
pub use types::{BuildSystem, DependencyScope, Language, Packaging};
// String utilities
pub use utils::{is_valid_identifier, to_application_name, to_package_name, to_pascal_case};
pub use version::{Qualifier, Version};
