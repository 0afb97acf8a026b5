/// A Maven-style artifact repository.
///
/// Repositories are identified by their `id`; the central repository is
/// recognised through [`Repository::is_maven_central`], never by its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub snapshots_enabled: bool,
}

impl Repository {
    pub const MAVEN_CENTRAL_ID: &'static str = "maven-central";

    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            snapshots_enabled: false,
        }
    }

    pub fn with_snapshots(mut self, enabled: bool) -> Self {
        self.snapshots_enabled = enabled;
        self
    }

    /// The default public repository every build can resolve from.
    pub fn maven_central() -> Self {
        Self::new(
            Self::MAVEN_CENTRAL_ID,
            "Maven Central",
            "https://repo.maven.apache.org/maven2",
        )
    }

    pub fn is_maven_central(&self) -> bool {
        self.id == Self::MAVEN_CENTRAL_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maven_central_identity() {
        assert!(Repository::maven_central().is_maven_central());

        let mirror = Repository::new("mirror", "Mirror", "https://repo.maven.apache.org/maven2");
        assert!(!mirror.is_maven_central());
    }

    #[test]
    fn test_snapshots_default_off() {
        let repo = Repository::new("a", "A", "https://a.example");
        assert!(!repo.snapshots_enabled);
        assert!(repo.with_snapshots(true).snapshots_enabled);
    }
}
