//! The sprout.toml written by `sprout init`.

use std::path::{Path, PathBuf};

use sprout_core::{BuildSystem, FileRules, GeneratedFile, Language, Overwrite};

use crate::{DEFAULT_PLATFORM_VERSION, MANIFEST_FILE};

/// A starter sprout.toml with a web dependency.
#[derive(Debug, Clone)]
pub struct StarterManifest {
    pub group: String,
    pub artifact: String,
    pub language: Language,
    pub build: BuildSystem,
    pub overwrite: Overwrite,
}

impl StarterManifest {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            language: Language::Java,
            build: BuildSystem::Maven,
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_build(mut self, build: BuildSystem) -> Self {
        self.build = build;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
            ..FileRules::default()
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
group = "{group}"
artifact = "{artifact}"
description = "Demo project for Spring Boot"
language = "{language}"
build = "{build}"
packaging = "jar"
java-version = "1.8"
platform-version = "{platform}"

[[dependencies]]
id = "web"
group = "org.springframework.boot"
artifact = "spring-boot-starter-web"
guides = [
    {{ href = "https://spring.io/guides/gs/rest-service/", label = "Building a RESTful Web Service" }},
]
reference = [
    {{ href = "https://docs.spring.io/spring-boot/docs/{platform}/reference/htmlsingle/#boot-features-developing-web-applications", label = "Spring Web" }},
]

# Uncomment to tune indentation ("tab" or a number of spaces):
# [indent]
# default = "4"
# maven = "tab"
"#,
            group = self.group,
            artifact = self.artifact,
            language = self.language,
            build = self.build,
            platform = DEFAULT_PLATFORM_VERSION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_manifest;

    #[test]
    fn test_starter_manifest_parses() {
        let starter = StarterManifest::new("com.example", "demo")
            .with_language(Language::Kotlin)
            .with_build(BuildSystem::Gradle);
        let manifest = parse_manifest(&starter.render(), MANIFEST_FILE).unwrap();
        assert_eq!(manifest.project.language, Language::Kotlin);
        assert_eq!(manifest.project.build, BuildSystem::Gradle);
        assert_eq!(manifest.dependencies.len(), 1);
        assert_eq!(manifest.dependencies[0].guides.len(), 1);
    }

    #[test]
    fn test_starter_is_written_if_missing() {
        let starter = StarterManifest::new("com.example", "demo");
        assert_eq!(starter.rules().overwrite, Overwrite::IfMissing);
        assert_eq!(starter.path(Path::new("app")), Path::new("app/sprout.toml"));
    }
}
