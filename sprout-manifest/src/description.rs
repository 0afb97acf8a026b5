use serde::Serialize;
use sprout_core::{BuildSystem, Language, Packaging, Version, to_application_name};

use crate::{
    manifest::{DEFAULT_DESCRIPTION, DependencyConfig, IndentConfig, Manifest},
    validate::effective_package,
};

/// A validated manifest with every default filled in.
///
/// This is what generation works from.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDescription {
    pub group: String,
    pub artifact: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub package_name: String,
    /// Name of the main application class, e.g. `DemoApplication`.
    pub application_name: String,
    pub language: Language,
    pub build_system: BuildSystem,
    pub packaging: Packaging,
    pub java_version: String,
    pub platform_version: Version,
    pub dependencies: Vec<DependencyConfig>,
    pub indent: IndentConfig,
}

impl ProjectDescription {
    pub fn has_dependency(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d.id == id)
    }
}

impl From<&Manifest> for ProjectDescription {
    fn from(manifest: &Manifest) -> Self {
        let project = &manifest.project;
        let name = project
            .name
            .clone()
            .unwrap_or_else(|| project.artifact.clone());
        Self {
            group: project.group.clone(),
            artifact: project.artifact.clone(),
            application_name: to_application_name(&name),
            name,
            description: project
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            version: project.version.clone(),
            package_name: effective_package(project),
            language: project.language,
            build_system: project.build,
            packaging: project.packaging,
            java_version: project.java_version.clone(),
            platform_version: project.platform_version.clone(),
            dependencies: manifest.dependencies.clone(),
            indent: manifest.indent.clone(),
        }
    }
}
