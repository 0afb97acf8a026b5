//! Maven support for sprout.
//!
//! - [`MavenBuildWriter`] renders a [`MavenBuild`](sprout_codegen::build::MavenBuild) as `pom.xml`
//! - [`maven_scope`] is the dependency scope table
//! - [`files`] holds the wrapper and gitignore files of a Maven project

pub mod files;
mod pom;
mod scope;

pub use pom::{CONTENT_KIND, MavenBuildWriter, escape};
pub use scope::{MavenScope, maven_scope};
