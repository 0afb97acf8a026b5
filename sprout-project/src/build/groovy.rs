use eyre::Result;
use sprout_codegen::{
    build::{Build, Dependency, DependencyScope, MavenBuild, MavenExecution},
    customize::Customizer,
};

pub const GMAVENPLUS_VERSION: &str = "1.6.1";

const GMAVENPLUS_GOALS: [&str; 8] = [
    "addSources",
    "addTestSources",
    "generateStubs",
    "compile",
    "generateTestStubs",
    "compileTests",
    "removeStubs",
    "removeTestStubs",
];

/// The Groovy runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroovyDependency;

impl Customizer<Build> for GroovyDependency {
    fn customize(&self, build: &mut Build) -> Result<()> {
        build.add_dependency(Dependency::artifact(
            "org.codehaus.groovy",
            "groovy",
            DependencyScope::Compile,
        ));
        Ok(())
    }
}

/// `gmavenplus-plugin` compiling main and test sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroovyMavenBuild;

impl Customizer<MavenBuild> for GroovyMavenBuild {
    fn customize(&self, build: &mut MavenBuild) -> Result<()> {
        let mut execution = MavenExecution::new();
        for goal in GMAVENPLUS_GOALS {
            execution.goal(goal);
        }
        build
            .plugin("org.codehaus.gmavenplus", "gmavenplus-plugin")
            .set_version(GMAVENPLUS_VERSION)
            .add_execution(execution);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmavenplus_execution_has_no_id() {
        let mut build = MavenBuild::new();
        GroovyMavenBuild.customize(&mut build).unwrap();
        let plugin = &build.plugins()[0];
        assert_eq!(plugin.version.as_deref(), Some(GMAVENPLUS_VERSION));
        let execution = &plugin.executions()[0];
        assert_eq!(execution.id, None);
        assert_eq!(execution.goals, GMAVENPLUS_GOALS);
    }

    #[test]
    fn test_groovy_dependency() {
        let mut build = Build::new();
        GroovyDependency.customize(&mut build).unwrap();
        assert_eq!(build.dependencies()[0].coordinates(), "org.codehaus.groovy:groovy");
    }
}
