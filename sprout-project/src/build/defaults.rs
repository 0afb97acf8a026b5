use eyre::Result;
use sprout_codegen::{
    build::{Build, Dependency, DependencyScope, GradleBuild, MavenBuild, Packaging},
    customize::{Customizer, HIGHEST_PRECEDENCE},
};
use sprout_core::{Language, Version};
use sprout_manifest::{DependencyConfig, ProjectDescription};

use super::{SPRING_BOOT_GROUP, boot_starter};

/// Group, artifact, version and Java version of the project.
#[derive(Debug, Clone)]
pub struct ProjectCoordinates {
    group: String,
    artifact: String,
    version: String,
    java_version: String,
}

impl ProjectCoordinates {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            group: description.group.clone(),
            artifact: description.artifact.clone(),
            version: description.version.clone(),
            java_version: description.java_version.clone(),
        }
    }
}

impl Customizer<Build> for ProjectCoordinates {
    fn customize(&self, build: &mut Build) -> Result<()> {
        build.set_group(&self.group);
        build.set_artifact(&self.artifact);
        build.set_version(&self.version);
        build.set_java_version(&self.java_version);
        Ok(())
    }

    fn order(&self) -> i32 {
        HIGHEST_PRECEDENCE
    }
}

/// The dependencies of the manifest, plus the starters every project needs.
///
/// The base `spring-boot-starter` is added when no declared dependency is in
/// the compile scope, and `spring-boot-starter-test` is always added.
#[derive(Debug, Clone)]
pub struct DeclaredDependencies {
    dependencies: Vec<DependencyConfig>,
}

impl DeclaredDependencies {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            dependencies: description.dependencies.clone(),
        }
    }
}

impl Customizer<Build> for DeclaredDependencies {
    fn customize(&self, build: &mut Build) -> Result<()> {
        let has_compile = self
            .dependencies
            .iter()
            .any(|d| d.scope == DependencyScope::Compile);
        if !has_compile {
            build.add_dependency(boot_starter(
                "root",
                "spring-boot-starter",
                DependencyScope::Compile,
            ));
        }
        for config in &self.dependencies {
            let mut dependency =
                Dependency::new(&config.id, &config.group, &config.artifact, config.scope);
            if let Some(version) = &config.version {
                dependency = dependency.with_version(version);
            }
            build.add_dependency(dependency);
        }
        if !build.has_dependency("test") {
            build.add_dependency(boot_starter(
                "test",
                "spring-boot-starter-test",
                DependencyScope::TestCompile,
            ));
        }
        Ok(())
    }
}

/// Name, description, `java.version`, the Spring Boot parent and its plugin.
#[derive(Debug, Clone)]
pub struct MavenDefaults {
    name: String,
    description: String,
    java_version: String,
    platform_version: Version,
}

impl MavenDefaults {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            name: description.name.clone(),
            description: description.description.clone(),
            java_version: description.java_version.clone(),
            platform_version: description.platform_version.clone(),
        }
    }
}

impl Customizer<MavenBuild> for MavenDefaults {
    fn customize(&self, build: &mut MavenBuild) -> Result<()> {
        build.set_name(&self.name);
        build.set_description(&self.description);
        build.set_property("java.version", &self.java_version);
        build.set_parent(
            SPRING_BOOT_GROUP,
            "spring-boot-starter-parent",
            self.platform_version.to_string(),
        );
        build.plugin(SPRING_BOOT_GROUP, "spring-boot-maven-plugin");
        Ok(())
    }
}

/// The Spring Boot plugin, the language plugin and dependency management.
#[derive(Debug, Clone)]
pub struct GradleDefaults {
    language: Language,
    platform_version: Version,
}

impl GradleDefaults {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            language: description.language,
            platform_version: description.platform_version.clone(),
        }
    }
}

impl Customizer<GradleBuild> for GradleDefaults {
    fn customize(&self, build: &mut GradleBuild) -> Result<()> {
        let version = self.platform_version.to_string();
        build.add_plugin("org.springframework.boot", Some(version.as_str()));
        // Kotlin brings its own versioned plugins.
        match self.language {
            Language::Java => build.add_plugin("java", None),
            Language::Groovy => build.add_plugin("groovy", None),
            Language::Kotlin => {}
        }
        build.apply_plugin("io.spring.dependency-management");
        Ok(())
    }
}

/// War packaging and the container provided at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarPackaging;

impl Customizer<Build> for WarPackaging {
    fn customize(&self, build: &mut Build) -> Result<()> {
        build.set_packaging(Packaging::War);
        if !build.has_dependency("tomcat") {
            build.add_dependency(boot_starter(
                "tomcat",
                "spring-boot-starter-tomcat",
                DependencyScope::ProvidedRuntime,
            ));
        }
        Ok(())
    }
}

/// The Gradle `war` plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarPlugin;

impl Customizer<GradleBuild> for WarPlugin {
    fn customize(&self, build: &mut GradleBuild) -> Result<()> {
        build.add_plugin("war", None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::tests::description;

    #[test]
    fn test_coordinates() {
        let mut build = Build::new();
        ProjectCoordinates::new(&description(""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.group(), Some("com.example"));
        assert_eq!(build.artifact(), Some("demo"));
        assert_eq!(build.version(), Some("0.0.1-SNAPSHOT"));
        assert_eq!(build.java_version(), Some("1.8"));
    }

    #[test]
    fn test_base_starter_added_without_compile_dependency() {
        let mut build = Build::new();
        DeclaredDependencies::new(&description(""))
            .customize(&mut build)
            .unwrap();
        let ids: Vec<_> = build.dependencies().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["root", "test"]);
    }

    #[test]
    fn test_declared_dependencies_keep_order_and_version() {
        let d = description(
            r#"
[[dependencies]]
id = "web"
group = "org.springframework.boot"
artifact = "spring-boot-starter-web"

[[dependencies]]
id = "lombok"
group = "org.projectlombok"
artifact = "lombok"
scope = "annotation-processor"
version = "1.18.4"
"#,
        );
        let mut build = Build::new();
        DeclaredDependencies::new(&d).customize(&mut build).unwrap();
        let deps = build.dependencies();
        let ids: Vec<_> = deps.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["web", "lombok", "test"]);
        assert_eq!(deps[1].version.as_deref(), Some("1.18.4"));
        assert_eq!(deps[1].scope, DependencyScope::AnnotationProcessor);
    }

    #[test]
    fn test_maven_defaults() {
        let mut build = MavenBuild::new();
        MavenDefaults::new(&description("name = \"Demo\""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.name(), Some("Demo"));
        assert_eq!(build.description(), Some("Demo project for Spring Boot"));
        assert_eq!(build.properties()["java.version"], "1.8");
        let parent = build.parent().unwrap();
        assert_eq!(parent.artifact, "spring-boot-starter-parent");
        assert_eq!(parent.version, "2.1.0.RELEASE");
        assert_eq!(build.plugins()[0].artifact, "spring-boot-maven-plugin");
    }

    #[test]
    fn test_gradle_defaults_per_language() {
        let mut build = GradleBuild::new();
        GradleDefaults::new(&description(""))
            .customize(&mut build)
            .unwrap();
        let ids: Vec<_> = build.plugins().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["org.springframework.boot", "java"]);
        assert_eq!(build.plugins()[0].version.as_deref(), Some("2.1.0.RELEASE"));
        assert_eq!(build.applied_plugins(), ["io.spring.dependency-management"]);

        let mut build = GradleBuild::new();
        GradleDefaults::new(&description("language = \"kotlin\""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.plugins().len(), 1);
    }

    #[test]
    fn test_war_packaging() {
        let mut build = Build::new();
        WarPackaging.customize(&mut build).unwrap();
        WarPackaging.customize(&mut build).unwrap();
        assert_eq!(build.packaging(), Packaging::War);
        assert_eq!(build.dependencies().len(), 1);
        assert_eq!(build.dependencies()[0].scope, DependencyScope::ProvidedRuntime);
    }
}
