use sprout_codegen::build::{BuildSystem, Dependency, DependencyScope, RenderError};

/// Configuration Spring Boot 2.1 does not define; the writer declares it.
pub const DEVELOPMENT_ONLY: &str = "developmentOnly";

/// The Gradle configuration a dependency scope is declared in.
pub fn gradle_configuration(scope: DependencyScope) -> Option<&'static str> {
    match scope {
        DependencyScope::AnnotationProcessor => Some("annotationProcessor"),
        DependencyScope::Compile => Some("implementation"),
        DependencyScope::CompileOnly => Some("compileOnly"),
        DependencyScope::DevelopmentOnly => Some(DEVELOPMENT_ONLY),
        DependencyScope::ProvidedRuntime => Some("providedRuntime"),
        DependencyScope::Runtime => Some("runtimeOnly"),
        DependencyScope::TestCompile => Some("testImplementation"),
        DependencyScope::TestRuntime => Some("testRuntimeOnly"),
        DependencyScope::Import => None,
    }
}

/// The configuration for `dependency` in a build with or without the `war`
/// plugin. `providedRuntime` only exists once `war` is applied, so jar
/// builds declare those dependencies in `runtimeOnly`.
pub(crate) fn configuration_for(
    dependency: &Dependency,
    war: bool,
) -> Result<&'static str, RenderError> {
    match dependency.scope {
        DependencyScope::ProvidedRuntime if !war => Ok("runtimeOnly"),
        scope => gradle_configuration(scope).ok_or_else(|| RenderError::UnmappedScope {
            scope,
            tool: BuildSystem::Gradle,
            dependency: dependency.id.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scope_but_import_is_mapped() {
        for scope in DependencyScope::ALL {
            assert_eq!(
                gradle_configuration(scope).is_some(),
                scope != DependencyScope::Import,
                "{scope}"
            );
        }
        assert_eq!(
            gradle_configuration(DependencyScope::Runtime),
            Some("runtimeOnly")
        );
    }

    #[test]
    fn test_provided_runtime_follows_war_plugin() {
        let tomcat = Dependency::new(
            "tomcat",
            "org.springframework.boot",
            "spring-boot-starter-tomcat",
            DependencyScope::ProvidedRuntime,
        );
        assert_eq!(configuration_for(&tomcat, true), Ok("providedRuntime"));
        assert_eq!(configuration_for(&tomcat, false), Ok("runtimeOnly"));
    }

    #[test]
    fn test_unmapped_scope_names_the_dependency() {
        let dependency = Dependency::new("bom", "g", "bom", DependencyScope::Import);
        let err = configuration_for(&dependency, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dependency scope 'import' has no gradle equivalent (dependency 'bom')"
        );
    }
}
