//! In-memory build model.
//!
//! - [`Build`] - tool-independent description (coordinates, dependencies, repositories, properties)
//! - [`MavenBuild`], [`GradleBuild`] - tool-specific extensions
//! - [`BuildCustomizers`] - ordered customizers tagged by build variant
//! - [`RenderError`] - configuration errors raised by the renderers

mod customizer;
mod dependency;
mod error;
mod gradle;
mod maven;
mod model;
mod repository;

pub use customizer::{BuildCustomizer, BuildCustomizers, BuildModel};
pub use dependency::Dependency;
pub use error::RenderError;
pub use gradle::{GradleBuild, GradlePlugin, TaskCustomization, TaskStatement};
pub use maven::{
    ConfigValue, Configuration, MavenBuild, MavenExecution, MavenParent, MavenPlugin,
    MavenPluginDependency,
};
pub use model::Build;
pub use repository::Repository;
pub use sprout_core::{BuildSystem, DependencyScope, Packaging};
