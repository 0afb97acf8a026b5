//! Gradle support for sprout.
//!
//! - [`GradleBuildWriter`] renders `build.gradle`
//! - [`GradleSettingsWriter`] renders `settings.gradle`
//! - [`gradle_configuration`] is the dependency scope table
//! - [`files`] holds the wrapper and gitignore files of a Gradle project

mod build_gradle;
pub mod files;
mod scope;
mod settings_gradle;

pub use build_gradle::{CONTENT_KIND, GradleBuildWriter, repository_declaration};
pub use scope::gradle_configuration;
pub use settings_gradle::GradleSettingsWriter;
