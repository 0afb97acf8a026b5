use sprout_core::DependencyScope;

/// A dependency declared in a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Identifier of the dependency in the project description (e.g. `web`).
    pub id: String,
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
    pub scope: DependencyScope,
}

impl Dependency {
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        scope: DependencyScope,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            artifact: artifact.into(),
            version: None,
            scope,
        }
    }

    /// A dependency whose id is its artifact id.
    pub fn artifact(
        group: impl Into<String>,
        artifact: impl Into<String>,
        scope: DependencyScope,
    ) -> Self {
        let artifact = artifact.into();
        Self::new(artifact.clone(), group, artifact, scope)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// `group:artifact`
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}
