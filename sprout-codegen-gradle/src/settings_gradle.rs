use sprout_codegen::{build::GradleBuild, builder::IndentStyles};

use crate::build_gradle::{CONTENT_KIND, repository_declaration};

/// Renders the `settings.gradle` of a [`GradleBuild`].
///
/// Only plugin repositories are listed, followed by the Gradle plugin portal.
#[derive(Debug, Clone)]
pub struct GradleSettingsWriter<'a> {
    styles: &'a IndentStyles,
}

impl<'a> GradleSettingsWriter<'a> {
    pub fn new(styles: &'a IndentStyles) -> Self {
        Self { styles }
    }

    pub fn write(&self, build: &GradleBuild) -> String {
        let mut out = self.styles.builder(CONTENT_KIND);
        out.push_block("pluginManagement {", "}", |out| {
            out.push_block("repositories {", "}", |out| {
                for repository in build.plugin_repositories() {
                    out.push_line(&repository_declaration(repository));
                }
                out.push_line("gradlePluginPortal()");
            });
        });
        if let Some(artifact) = build.artifact() {
            out.push_line(&format!("rootProject.name = '{artifact}'"));
        }
        out.build()
    }
}

#[cfg(test)]
mod tests {
    use sprout_codegen::build::Repository;

    use super::*;

    #[test]
    fn test_root_project_name() {
        let mut build = GradleBuild::new();
        build.set_artifact("demo");
        let settings = GradleSettingsWriter::new(&IndentStyles::default()).write(&build);
        assert_eq!(
            settings,
            "pluginManagement {\n    repositories {\n        gradlePluginPortal()\n    }\n}\nrootProject.name = 'demo'\n"
        );
    }

    #[test]
    fn test_plugin_repositories_in_insertion_order() {
        let mut build = GradleBuild::new();
        build.add_plugin_repository(Repository::maven_central());
        build.add_plugin_repository(Repository::new(
            "spring-milestones",
            "Spring Milestones",
            "https://repo.spring.io/milestone",
        ));
        let settings = GradleSettingsWriter::new(&IndentStyles::default()).write(&build);
        assert!(settings.contains(
            "        mavenCentral()\n        maven { url 'https://repo.spring.io/milestone' }\n        gradlePluginPortal()\n"
        ));
    }
}
