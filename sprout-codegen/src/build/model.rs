use indexmap::IndexMap;
use sprout_core::Packaging;

use super::{Dependency, Repository};

/// Tool-independent description of a build.
///
/// Scalars are last-write-wins; collections only grow and keep insertion
/// order. Nothing is validated here: scopes are checked by the renderers.
#[derive(Debug, Clone, Default)]
pub struct Build {
    group: Option<String>,
    artifact: Option<String>,
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    java_version: Option<String>,
    packaging: Packaging,
    dependencies: Vec<Dependency>,
    repositories: Vec<Repository>,
    plugin_repositories: Vec<Repository>,
    properties: IndexMap<String, String>,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = Some(group.into());
    }

    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }

    pub fn set_artifact(&mut self, artifact: impl Into<String>) {
        self.artifact = Some(artifact.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn java_version(&self) -> Option<&str> {
        self.java_version.as_deref()
    }

    pub fn set_java_version(&mut self, java_version: impl Into<String>) {
        self.java_version = Some(java_version.into());
    }

    pub fn packaging(&self) -> Packaging {
        self.packaging
    }

    pub fn set_packaging(&mut self, packaging: Packaging) {
        self.packaging = packaging;
    }

    /// Dependencies in insertion order. Duplicates are kept.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn has_dependency(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d.id == id)
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn add_repository(&mut self, repository: Repository) {
        self.repositories.push(repository);
    }

    /// Repositories used to resolve build plugins, kept apart from [`Build::repositories`].
    pub fn plugin_repositories(&self) -> &[Repository] {
        &self.plugin_repositories
    }

    pub fn add_plugin_repository(&mut self, repository: Repository) {
        self.plugin_repositories.push(repository);
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    /// Set a property. Re-setting a key updates its value in place.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}
