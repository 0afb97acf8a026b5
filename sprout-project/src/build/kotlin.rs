use eyre::Result;
use sprout_codegen::{
    build::{Build, Dependency, DependencyScope, GradleBuild, MavenBuild},
    customize::Customizer,
};
use sprout_manifest::ProjectDescription;

use crate::conditions;

/// Kotlin version used by the Gradle plugins and, on platforms before 2.0,
/// by the Maven plugin.
pub const KOTLIN_VERSION: &str = "1.2.71";

const KOTLIN_GROUP: &str = "org.jetbrains.kotlin";
const COMPILER_ARGS: &str = "-Xjsr305=strict";

/// The Kotlin standard library and reflection.
#[derive(Debug, Clone)]
pub struct KotlinDependencies {
    stdlib: &'static str,
}

impl KotlinDependencies {
    pub fn new(description: &ProjectDescription) -> Self {
        let stdlib = if conditions::platform_at_least(description, 2) {
            "kotlin-stdlib-jdk8"
        } else {
            "kotlin-stdlib-jre8"
        };
        Self { stdlib }
    }
}

impl Customizer<Build> for KotlinDependencies {
    fn customize(&self, build: &mut Build) -> Result<()> {
        build.add_dependency(Dependency::artifact(
            KOTLIN_GROUP,
            self.stdlib,
            DependencyScope::Compile,
        ));
        build.add_dependency(Dependency::artifact(
            KOTLIN_GROUP,
            "kotlin-reflect",
            DependencyScope::Compile,
        ));
        Ok(())
    }
}

/// Source directories and `kotlin-maven-plugin` with the Spring compiler plugin.
///
/// From 2.0 the parent manages the plugin version and executions; older
/// platforms get the full configuration.
#[derive(Debug, Clone)]
pub struct KotlinMavenBuild {
    managed_by_parent: bool,
}

impl KotlinMavenBuild {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            managed_by_parent: conditions::platform_at_least(description, 2),
        }
    }
}

impl Customizer<MavenBuild> for KotlinMavenBuild {
    fn customize(&self, build: &mut MavenBuild) -> Result<()> {
        build.set_source_directory("${project.basedir}/src/main/kotlin");
        build.set_test_source_directory("${project.basedir}/src/test/kotlin");
        if !self.managed_by_parent {
            build.set_property("kotlin.version", KOTLIN_VERSION);
        }

        let plugin = build.plugin(KOTLIN_GROUP, "kotlin-maven-plugin");
        if !self.managed_by_parent {
            plugin
                .set_version("${kotlin.version}")
                .execution("compile", |execution| {
                    execution.phase("compile").goal("compile");
                })
                .execution("test-compile", |execution| {
                    execution.phase("test-compile").goal("test-compile");
                });
        }
        let managed_by_parent = self.managed_by_parent;
        plugin
            .configure(|config| {
                config.nested("args", |args| {
                    args.add("arg", COMPILER_ARGS);
                });
                config.nested("compilerPlugins", |plugins| {
                    plugins.add("plugin", "spring");
                });
                if !managed_by_parent {
                    config.add("jvmTarget", "${java.version}");
                }
            })
            .add_dependency(KOTLIN_GROUP, "kotlin-maven-allopen", Some("${kotlin.version}"));
        Ok(())
    }
}

/// The Kotlin Gradle plugins and compiler options of both compile tasks.
#[derive(Debug, Clone)]
pub struct KotlinGradleBuild {
    java_version: String,
}

impl KotlinGradleBuild {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            java_version: description.java_version.clone(),
        }
    }
}

impl Customizer<GradleBuild> for KotlinGradleBuild {
    fn customize(&self, build: &mut GradleBuild) -> Result<()> {
        build.add_plugin("org.jetbrains.kotlin.jvm", Some(KOTLIN_VERSION));
        build.add_plugin("org.jetbrains.kotlin.plugin.spring", Some(KOTLIN_VERSION));
        for task in ["compileKotlin", "compileTestKotlin"] {
            build.customize_task(task, |task| {
                task.set("kotlinOptions.freeCompilerArgs", format!("['{COMPILER_ARGS}']"))
                    .set("kotlinOptions.jvmTarget", format!("'{}'", self.java_version));
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sprout_codegen::build::{ConfigValue, TaskStatement};

    use super::*;
    use crate::conditions::tests::description;

    #[test]
    fn test_dependencies_follow_platform() {
        let mut build = Build::new();
        KotlinDependencies::new(&description(""))
            .customize(&mut build)
            .unwrap();
        let artifacts: Vec<_> = build
            .dependencies()
            .iter()
            .map(|d| d.artifact.as_str())
            .collect();
        assert_eq!(artifacts, ["kotlin-stdlib-jdk8", "kotlin-reflect"]);

        let mut build = Build::new();
        KotlinDependencies::new(&description("platform-version = \"1.5.17.RELEASE\""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.dependencies()[0].artifact, "kotlin-stdlib-jre8");
    }

    #[test]
    fn test_maven_plugin_managed_by_parent() {
        let mut build = MavenBuild::new();
        KotlinMavenBuild::new(&description(""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.source_directory(), Some("${project.basedir}/src/main/kotlin"));
        let plugin = &build.plugins()[0];
        assert_eq!(plugin.artifact, "kotlin-maven-plugin");
        assert_eq!(plugin.version, None);
        assert!(plugin.executions().is_empty());
        let names: Vec<_> = plugin
            .configuration()
            .entries()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, ["args", "compilerPlugins"]);
        assert_eq!(plugin.dependencies()[0].artifact, "kotlin-maven-allopen");
        assert!(!build.properties().contains_key("kotlin.version"));
    }

    #[test]
    fn test_maven_plugin_before_2_0() {
        let mut build = MavenBuild::new();
        KotlinMavenBuild::new(&description("platform-version = \"1.5.17.RELEASE\""))
            .customize(&mut build)
            .unwrap();
        assert_eq!(build.properties()["kotlin.version"], KOTLIN_VERSION);
        let plugin = &build.plugins()[0];
        assert_eq!(plugin.version.as_deref(), Some("${kotlin.version}"));
        let ids: Vec<_> = plugin
            .executions()
            .iter()
            .map(|e| e.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, ["compile", "test-compile"]);
        assert!(plugin.configuration().entries().iter().any(|(name, value)| {
            name == "jvmTarget" && *value == ConfigValue::Text("${java.version}".into())
        }));
    }

    #[test]
    fn test_gradle_plugins_and_tasks() {
        let mut build = GradleBuild::new();
        KotlinGradleBuild::new(&description(""))
            .customize(&mut build)
            .unwrap();
        let ids: Vec<_> = build.plugins().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["org.jetbrains.kotlin.jvm", "org.jetbrains.kotlin.plugin.spring"]);
        let tasks: Vec<_> = build.tasks().keys().map(String::as_str).collect();
        assert_eq!(tasks, ["compileKotlin", "compileTestKotlin"]);
        assert_eq!(
            build.tasks()["compileKotlin"][0].statements()[1],
            TaskStatement::Assignment {
                property: "kotlinOptions.jvmTarget".into(),
                value: "'1.8'".into(),
            }
        );
    }
}
