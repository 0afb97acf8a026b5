use eyre::Result;
use sprout_codegen::{
    build::{
        ConfigValue, Configuration, MavenBuild, MavenExecution, MavenPlugin, Packaging,
        Repository,
    },
    builder::{CodeBuilder, IndentStyles},
};

use crate::scope::{self, MavenScope};

/// Content kind used to look up the pom indent.
pub const CONTENT_KIND: &str = "maven";

const PROJECT_OPEN: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;
const SCHEMA_LOCATION: &str = r#"xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">"#;

/// Renders a [`MavenBuild`] as `pom.xml`.
#[derive(Debug, Clone)]
pub struct MavenBuildWriter<'a> {
    styles: &'a IndentStyles,
}

impl<'a> MavenBuildWriter<'a> {
    pub fn new(styles: &'a IndentStyles) -> Self {
        Self { styles }
    }

    /// Render the pom.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnmappedScope`](sprout_codegen::build::RenderError)
    /// when a dependency uses a scope Maven cannot express.
    pub fn write(&self, build: &MavenBuild) -> Result<String> {
        let mut dependencies = scope::resolve(build.dependencies())?;
        dependencies.sort_by_key(|(_, scope)| scope.rank);

        let mut out = self.styles.builder(CONTENT_KIND);
        out.push_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
            .push_line(PROJECT_OPEN);
        out.push_indent().push_indent();
        out.push_line(SCHEMA_LOCATION);
        out.push_dedent();

        element(&mut out, "modelVersion", "4.0.0");
        if let Some(parent) = build.parent() {
            out.push_block("<parent>", "</parent>", |out| {
                element(out, "groupId", &parent.group);
                element(out, "artifactId", &parent.artifact);
                element(out, "version", &parent.version);
                out.push_line("<relativePath/>");
            });
        }
        optional_element(&mut out, "groupId", build.group());
        optional_element(&mut out, "artifactId", build.artifact());
        optional_element(&mut out, "version", build.version());
        if build.packaging() == Packaging::War {
            element(&mut out, "packaging", "war");
        }
        optional_element(&mut out, "name", build.name());
        optional_element(&mut out, "description", build.description());

        if !build.properties().is_empty() {
            out.push_blank();
            out.push_block("<properties>", "</properties>", |out| {
                for (key, value) in build.properties() {
                    element(out, key, value);
                }
            });
        }

        if !dependencies.is_empty() {
            out.push_blank();
            out.push_block("<dependencies>", "</dependencies>", |out| {
                for (dependency, scope) in &dependencies {
                    write_dependency(
                        out,
                        &dependency.group,
                        &dependency.artifact,
                        dependency.version.as_deref(),
                        *scope,
                    );
                }
            });
        }

        write_build(&mut out, build);
        write_repositories(&mut out, "repositories", "repository", build.repositories());
        write_repositories(
            &mut out,
            "pluginRepositories",
            "pluginRepository",
            build.plugin_repositories(),
        );

        out.push_blank();
        out.push_dedent();
        out.push_line("</project>");
        Ok(out.build())
    }
}

fn write_dependency(
    out: &mut CodeBuilder,
    group: &str,
    artifact: &str,
    version: Option<&str>,
    scope: MavenScope,
) {
    out.push_block("<dependency>", "</dependency>", |out| {
        element(out, "groupId", group);
        element(out, "artifactId", artifact);
        optional_element(out, "version", version);
        optional_element(out, "scope", scope.scope);
        if scope.optional {
            element(out, "optional", "true");
        }
    });
}

fn write_build(out: &mut CodeBuilder, build: &MavenBuild) {
    let has_directories =
        build.source_directory().is_some() || build.test_source_directory().is_some();
    if !has_directories && build.plugins().is_empty() {
        return;
    }
    out.push_blank();
    out.push_block("<build>", "</build>", |out| {
        optional_element(out, "sourceDirectory", build.source_directory());
        optional_element(out, "testSourceDirectory", build.test_source_directory());
        if !build.plugins().is_empty() {
            out.push_block("<plugins>", "</plugins>", |out| {
                for plugin in build.plugins() {
                    write_plugin(out, plugin);
                }
            });
        }
    });
}

fn write_plugin(out: &mut CodeBuilder, plugin: &MavenPlugin) {
    out.push_block("<plugin>", "</plugin>", |out| {
        element(out, "groupId", &plugin.group);
        element(out, "artifactId", &plugin.artifact);
        optional_element(out, "version", plugin.version.as_deref());
        if !plugin.executions().is_empty() {
            out.push_block("<executions>", "</executions>", |out| {
                for execution in plugin.executions() {
                    write_execution(out, execution);
                }
            });
        }
        write_configuration(out, plugin.configuration());
        if !plugin.dependencies().is_empty() {
            out.push_block("<dependencies>", "</dependencies>", |out| {
                for dependency in plugin.dependencies() {
                    out.push_block("<dependency>", "</dependency>", |out| {
                        element(out, "groupId", &dependency.group);
                        element(out, "artifactId", &dependency.artifact);
                        optional_element(out, "version", dependency.version.as_deref());
                    });
                }
            });
        }
    });
}

fn write_execution(out: &mut CodeBuilder, execution: &MavenExecution) {
    out.push_block("<execution>", "</execution>", |out| {
        optional_element(out, "id", execution.id.as_deref());
        optional_element(out, "phase", execution.phase.as_deref());
        if !execution.goals.is_empty() {
            out.push_block("<goals>", "</goals>", |out| {
                for goal in &execution.goals {
                    element(out, "goal", goal);
                }
            });
        }
        write_configuration(out, &execution.configuration);
    });
}

fn write_configuration(out: &mut CodeBuilder, configuration: &Configuration) {
    if configuration.is_empty() {
        return;
    }
    out.push_block("<configuration>", "</configuration>", |out| {
        write_configuration_entries(out, configuration);
    });
}

fn write_configuration_entries(out: &mut CodeBuilder, configuration: &Configuration) {
    for (name, value) in configuration.entries() {
        match value {
            ConfigValue::Text(text) => element(out, name, text),
            ConfigValue::Nested(nested) => {
                out.push_block(&format!("<{name}>"), &format!("</{name}>"), |out| {
                    write_configuration_entries(out, nested);
                });
            }
        }
    }
}

fn write_repositories(out: &mut CodeBuilder, list: &str, item: &str, repositories: &[Repository]) {
    let repositories: Vec<_> = repositories
        .iter()
        .filter(|repository| !repository.is_maven_central())
        .collect();
    if repositories.is_empty() {
        return;
    }
    out.push_blank();
    out.push_block(&format!("<{list}>"), &format!("</{list}>"), |out| {
        for repository in repositories {
            out.push_block(&format!("<{item}>"), &format!("</{item}>"), |out| {
                element(out, "id", &repository.id);
                element(out, "name", &repository.name);
                element(out, "url", &repository.url);
                if repository.snapshots_enabled {
                    out.push_block("<snapshots>", "</snapshots>", |out| {
                        element(out, "enabled", "true");
                    });
                }
            });
        }
    });
}

fn element(out: &mut CodeBuilder, name: &str, value: &str) {
    out.push_line(&format!("<{name}>{}</{name}>", escape(value)));
}

fn optional_element(out: &mut CodeBuilder, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        element(out, name, value);
    }
}

/// Escape XML text content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use sprout_codegen::build::{Dependency, DependencyScope, RenderError};
    use sprout_core::Indent;

    use super::*;

    fn render(build: &MavenBuild) -> String {
        MavenBuildWriter::new(&IndentStyles::default())
            .write(build)
            .unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tom & Jerry <demo>"), "Tom &amp; Jerry &lt;demo&gt;");
        assert_eq!(escape("${java.version}"), "${java.version}");
    }

    #[test]
    fn test_minimal_pom() {
        let mut build = MavenBuild::new();
        build.set_group("com.example");
        build.set_artifact("demo");
        let pom = render(&build);
        assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project "));
        assert!(pom.contains("\n    <modelVersion>4.0.0</modelVersion>\n"));
        assert!(pom.contains("\n    <groupId>com.example</groupId>\n"));
        assert!(pom.ends_with("\n\n</project>\n"));
        assert!(!pom.contains("<packaging>"));
        assert!(!pom.contains("<build>"));
    }

    #[test]
    fn test_war_packaging() {
        let mut build = MavenBuild::new();
        build.set_packaging(Packaging::War);
        assert!(render(&build).contains("    <packaging>war</packaging>\n"));
    }

    #[test]
    fn test_dependencies_grouped_by_scope() {
        let mut build = MavenBuild::new();
        build.add_dependency(Dependency::artifact("t", "test", DependencyScope::TestCompile));
        build.add_dependency(Dependency::artifact("r", "runtime", DependencyScope::Runtime));
        build.add_dependency(Dependency::artifact("p", "provided", DependencyScope::ProvidedRuntime));
        build.add_dependency(Dependency::artifact("c", "compile", DependencyScope::Compile));
        build.add_dependency(Dependency::artifact("d", "devtools", DependencyScope::DevelopmentOnly));

        let pom = render(&build);
        let position = |artifact: &str| {
            pom.find(&format!("<artifactId>{artifact}</artifactId>"))
                .unwrap()
        };
        assert!(position("compile") < position("runtime"));
        assert!(position("runtime") < position("devtools"));
        assert!(position("devtools") < position("provided"));
        assert!(position("provided") < position("test"));
        assert!(pom.contains(
            "            <artifactId>devtools</artifactId>\n            <scope>runtime</scope>\n            <optional>true</optional>\n"
        ));
    }

    #[test]
    fn test_unmapped_scope_fails() {
        let mut build = MavenBuild::new();
        build.add_dependency(Dependency::artifact("g", "bom", DependencyScope::Import));
        let err = MavenBuildWriter::new(&IndentStyles::default())
            .write(&build)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::UnmappedScope { .. })
        ));
    }

    #[test]
    fn test_central_repository_is_implicit() {
        let mut build = MavenBuild::new();
        build.add_repository(Repository::maven_central());
        assert!(!render(&build).contains("<repositories>"));

        build.add_repository(
            Repository::new("spring-snapshots", "Spring Snapshots", "https://repo.spring.io/snapshot")
                .with_snapshots(true),
        );
        let pom = render(&build);
        assert!(pom.contains("            <id>spring-snapshots</id>\n"));
        assert!(!pom.contains("repo.maven.apache.org"));
        assert!(pom.contains(
            "            <snapshots>\n                <enabled>true</enabled>\n            </snapshots>\n"
        ));
    }

    #[test]
    fn test_nested_configuration_keeps_insertion_order() {
        let mut build = MavenBuild::new();
        build.plugin("org.example", "example-plugin").configure(|config| {
            config.add("zeta", "1").nested("args", |args| {
                args.add("arg", "-a").add("arg", "-b");
            });
            config.add("alpha", "2");
        });
        let pom = render(&build);
        let zeta = pom.find("<zeta>").unwrap();
        let args = pom.find("<args>").unwrap();
        let alpha = pom.find("<alpha>").unwrap();
        assert!(zeta < args && args < alpha);
        assert!(pom.contains("<arg>-a</arg>\n"));
        assert!(pom.contains("<arg>-b</arg>\n"));
    }

    #[test]
    fn test_tab_indent() {
        let styles = IndentStyles::default().with(CONTENT_KIND, Indent::Tab);
        let build = MavenBuild::new();
        let pom = MavenBuildWriter::new(&styles).write(&build).unwrap();
        assert!(pom.contains("\n\t<modelVersion>4.0.0</modelVersion>\n"));
        assert!(pom.contains("\n\t\txsi:schemaLocation="));
    }
}
