use eyre::Result;
use sprout_codegen::{
    build::{GradleBuild, Repository, TaskStatement},
    builder::{CodeBuilder, IndentStyles},
};

use crate::scope;

/// Content kind used to look up the indent of Gradle scripts.
pub const CONTENT_KIND: &str = "gradle";

/// Renders a [`GradleBuild`] as `build.gradle`.
#[derive(Debug, Clone)]
pub struct GradleBuildWriter<'a> {
    styles: &'a IndentStyles,
}

impl<'a> GradleBuildWriter<'a> {
    pub fn new(styles: &'a IndentStyles) -> Self {
        Self { styles }
    }

    /// Render the build script.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnmappedScope`](sprout_codegen::build::RenderError)
    /// when a dependency uses a scope Gradle cannot express.
    pub fn write(&self, build: &GradleBuild) -> Result<String> {
        let war = build.plugins().iter().any(|plugin| plugin.id == "war");
        let mut dependencies = build
            .dependencies()
            .iter()
            .map(|dependency| {
                scope::configuration_for(dependency, war)
                    .map(|configuration| (dependency, configuration))
            })
            .collect::<Result<Vec<_>, _>>()?;
        dependencies.sort_by_cached_key(|(dependency, _)| dependency.coordinates());

        let mut out = self.styles.builder(CONTENT_KIND);
        out.push_block("plugins {", "}", |out| {
            for plugin in build.plugins() {
                match &plugin.version {
                    Some(version) => out.push_line(&format!("id '{}' version '{version}'", plugin.id)),
                    None => out.push_line(&format!("id '{}'", plugin.id)),
                };
            }
        });
        out.push_blank();

        if !build.applied_plugins().is_empty() {
            for id in build.applied_plugins() {
                out.push_line(&format!("apply plugin: '{id}'"));
            }
            out.push_blank();
        }

        let assignments = [
            ("group", build.group()),
            ("version", build.version()),
            ("sourceCompatibility", build.java_version()),
        ];
        if assignments.iter().any(|(_, value)| value.is_some()) {
            for (property, value) in assignments {
                if let Some(value) = value {
                    out.push_line(&format!("{property} = '{value}'"));
                }
            }
            out.push_blank();
        }

        if !build.ext().is_empty() {
            out.push_block("ext {", "}", |out| {
                for (key, value) in build.ext() {
                    out.push_line(&format!("set('{key}', {value})"));
                }
            });
            out.push_blank();
        }

        if !build.repositories().is_empty() {
            out.push_block("repositories {", "}", |out| {
                for repository in build.repositories() {
                    out.push_line(&repository_declaration(repository));
                }
            });
            out.push_blank();
        }

        if dependencies
            .iter()
            .any(|(_, configuration)| *configuration == scope::DEVELOPMENT_ONLY)
        {
            write_development_only(&mut out);
            out.push_blank();
        }

        out.push_block("dependencies {", "}", |out| {
            for (dependency, configuration) in &dependencies {
                match &dependency.version {
                    Some(version) => out.push_line(&format!(
                        "{configuration} '{}:{version}'",
                        dependency.coordinates()
                    )),
                    None => out.push_line(&format!(
                        "{configuration} '{}'",
                        dependency.coordinates()
                    )),
                };
            }
        });

        write_tasks(&mut out, build);
        Ok(out.build())
    }
}

/// Declares `developmentOnly`, which the Spring Boot plugin only provides
/// itself from 2.3 on, and keeps it off the packaged classpath.
fn write_development_only(out: &mut CodeBuilder) {
    out.push_block("configurations {", "}", |out| {
        out.push_line(scope::DEVELOPMENT_ONLY);
        out.push_block("runtimeClasspath {", "}", |out| {
            out.push_line(&format!("extendsFrom {}", scope::DEVELOPMENT_ONLY));
        });
    });
}

fn write_tasks(out: &mut CodeBuilder, build: &GradleBuild) {
    for (task, customizations) in build.tasks() {
        out.push_blank();
        out.push_block(&format!("{task} {{"), "}", |out| {
            for statement in customizations.iter().flat_map(|c| c.statements()) {
                match statement {
                    TaskStatement::Invocation { target, arguments } => {
                        out.push_line(&format!("{target} {}", arguments.join(", ")))
                    }
                    TaskStatement::Assignment { property, value } => {
                        out.push_line(&format!("{property} = {value}"))
                    }
                };
            }
        });
    }
}

/// `mavenCentral()` for the central repository, `maven { url '..' }` otherwise.
pub fn repository_declaration(repository: &Repository) -> String {
    if repository.is_maven_central() {
        "mavenCentral()".to_string()
    } else {
        format!("maven {{ url '{}' }}", repository.url)
    }
}
