use eyre::Result;
use sprout_codegen::{
    build::{GradleBuild, MavenBuild},
    customize::Customizer,
};

pub const ASCIIDOCTOR_VERSION: &str = "1.5.3";

/// Asciidoctor rendering of the REST Docs snippets during `prepare-package`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestDocsMavenBuild;

impl Customizer<MavenBuild> for RestDocsMavenBuild {
    fn customize(&self, build: &mut MavenBuild) -> Result<()> {
        build
            .plugin("org.asciidoctor", "asciidoctor-maven-plugin")
            .set_version(ASCIIDOCTOR_VERSION)
            .execution("generate-docs", |execution| {
                execution
                    .phase("prepare-package")
                    .goal("process-asciidoc")
                    .configure(|config| {
                        config.add("backend", "html").add("doctype", "book");
                    });
            })
            .add_dependency(
                "org.springframework.restdocs",
                "spring-restdocs-asciidoctor",
                Some("${spring-restdocs.version}"),
            );
        Ok(())
    }
}

/// The asciidoctor plugin and the snippets directory shared by `test` and
/// `asciidoctor`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestDocsGradleBuild;

impl Customizer<GradleBuild> for RestDocsGradleBuild {
    fn customize(&self, build: &mut GradleBuild) -> Result<()> {
        build.add_plugin("org.asciidoctor.convert", Some(ASCIIDOCTOR_VERSION));
        build.set_ext("snippetsDir", "file(\"build/generated-snippets\")");
        build.customize_task("test", |task| {
            task.invoke("outputs.dir", ["snippetsDir"]);
        });
        build.customize_task("asciidoctor", |task| {
            task.invoke("inputs.dir", ["snippetsDir"])
                .invoke("dependsOn", ["test"]);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sprout_codegen::build::{ConfigValue, TaskStatement};

    use super::*;

    fn invocation(target: &str, argument: &str) -> TaskStatement {
        TaskStatement::Invocation {
            target: target.to_string(),
            arguments: vec![argument.to_string()],
        }
    }

    #[test]
    fn test_customizes_maven_build() {
        let mut build = MavenBuild::new();
        RestDocsMavenBuild.customize(&mut build).unwrap();
        assert_eq!(build.plugins().len(), 1);
        let plugin = &build.plugins()[0];
        assert_eq!(plugin.group, "org.asciidoctor");
        assert_eq!(plugin.artifact, "asciidoctor-maven-plugin");
        assert_eq!(plugin.version.as_deref(), Some("1.5.3"));

        assert_eq!(plugin.executions().len(), 1);
        let execution = &plugin.executions()[0];
        assert_eq!(execution.id.as_deref(), Some("generate-docs"));
        assert_eq!(execution.phase.as_deref(), Some("prepare-package"));
        assert_eq!(execution.goals, ["process-asciidoc"]);
        assert_eq!(
            execution.configuration.entries(),
            [
                ("backend".to_string(), ConfigValue::Text("html".into())),
                ("doctype".to_string(), ConfigValue::Text("book".into())),
            ]
        );

        assert_eq!(plugin.dependencies().len(), 1);
        let dependency = &plugin.dependencies()[0];
        assert_eq!(dependency.group, "org.springframework.restdocs");
        assert_eq!(dependency.artifact, "spring-restdocs-asciidoctor");
        assert_eq!(dependency.version.as_deref(), Some("${spring-restdocs.version}"));
    }

    #[test]
    fn test_customizes_gradle_build() {
        let mut build = GradleBuild::new();
        RestDocsGradleBuild.customize(&mut build).unwrap();
        assert_eq!(build.plugins().len(), 1);
        assert_eq!(build.plugins()[0].id, "org.asciidoctor.convert");
        assert_eq!(build.plugins()[0].version.as_deref(), Some("1.5.3"));

        let test = &build.tasks()["test"];
        assert_eq!(test.len(), 1);
        assert_eq!(test[0].statements(), [invocation("outputs.dir", "snippetsDir")]);

        let asciidoctor = &build.tasks()["asciidoctor"];
        assert_eq!(asciidoctor.len(), 1);
        assert_eq!(
            asciidoctor[0].statements(),
            [
                invocation("inputs.dir", "snippetsDir"),
                invocation("dependsOn", "test"),
            ]
        );
    }
}
