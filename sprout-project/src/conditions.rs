//! Predicates deciding which customizers and contributors take part in a run.
//!
//! Each predicate is evaluated once, while the registries are assembled.

use sprout_core::{BuildSystem, Language, Packaging};
use sprout_manifest::ProjectDescription;

pub fn is_maven(description: &ProjectDescription) -> bool {
    description.build_system == BuildSystem::Maven
}

pub fn is_gradle(description: &ProjectDescription) -> bool {
    description.build_system == BuildSystem::Gradle
}

pub fn is_language(description: &ProjectDescription, language: Language) -> bool {
    description.language == language
}

pub fn is_war(description: &ProjectDescription) -> bool {
    description.packaging == Packaging::War
}

pub fn has_dependency(description: &ProjectDescription, id: &str) -> bool {
    description.has_dependency(id)
}

/// Whether the platform is at least `major.0`, qualifiers included
/// (`2.0.0.M1` counts as 2).
pub fn platform_at_least(description: &ProjectDescription, major: u32) -> bool {
    description.platform_version.major() >= major
}

/// Whether the platform is a milestone, release candidate or snapshot.
pub fn is_pre_release_platform(description: &ProjectDescription) -> bool {
    !description.platform_version.is_release()
}

#[cfg(test)]
pub(crate) mod tests {
    use sprout_manifest::{Manifest, ProjectDescription};

    use super::*;

    pub(crate) fn description(extra: &str) -> ProjectDescription {
        let src = format!("[project]\ngroup = \"com.example\"\nartifact = \"demo\"\n{extra}");
        let manifest: Manifest = src.parse().unwrap();
        ProjectDescription::from(&manifest)
    }

    #[test]
    fn test_defaults() {
        let d = description("");
        assert!(is_maven(&d));
        assert!(!is_gradle(&d));
        assert!(is_language(&d, Language::Java));
        assert!(!is_war(&d));
        assert!(platform_at_least(&d, 2));
        assert!(!is_pre_release_platform(&d));
    }

    #[test]
    fn test_platform_predicates() {
        let d = description("platform-version = \"1.5.17.RELEASE\"");
        assert!(!platform_at_least(&d, 2));
        let d = description("platform-version = \"2.1.0.M1\"");
        assert!(platform_at_least(&d, 2));
        assert!(is_pre_release_platform(&d));
    }

    #[test]
    fn test_dependency_and_packaging() {
        let d = description(
            "packaging = \"war\"\n\n[[dependencies]]\nid = \"restdocs\"\ngroup = \"g\"\nartifact = \"a\"\n",
        );
        assert!(is_war(&d));
        assert!(has_dependency(&d, "restdocs"));
        assert!(!has_dependency(&d, "web"));
    }
}
