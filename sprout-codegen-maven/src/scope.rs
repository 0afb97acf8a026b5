use sprout_codegen::build::{BuildSystem, Dependency, DependencyScope, RenderError};

/// How a dependency scope is expressed in a pom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MavenScope {
    /// Value of `<scope>`, omitted for the compile scope.
    pub scope: Option<&'static str>,
    /// Whether `<optional>true</optional>` is written.
    pub optional: bool,
    /// Canonical position of the dependency in the pom (compile, runtime, provided, test).
    pub rank: u8,
}

const fn mapped(scope: Option<&'static str>, optional: bool, rank: u8) -> Option<MavenScope> {
    Some(MavenScope {
        scope,
        optional,
        rank,
    })
}

/// The Maven equivalent of `scope`, if any.
pub fn maven_scope(scope: DependencyScope) -> Option<MavenScope> {
    match scope {
        DependencyScope::Compile => mapped(None, false, 0),
        DependencyScope::AnnotationProcessor => mapped(None, true, 0),
        DependencyScope::CompileOnly => mapped(None, true, 0),
        DependencyScope::Runtime => mapped(Some("runtime"), false, 1),
        DependencyScope::DevelopmentOnly => mapped(Some("runtime"), true, 1),
        DependencyScope::ProvidedRuntime => mapped(Some("provided"), false, 2),
        DependencyScope::TestCompile => mapped(Some("test"), false, 3),
        DependencyScope::TestRuntime => mapped(Some("test"), false, 3),
        DependencyScope::Import => None,
    }
}

/// Map every dependency, failing on the first scope Maven cannot express.
pub(crate) fn resolve(
    dependencies: &[Dependency],
) -> Result<Vec<(&Dependency, MavenScope)>, RenderError> {
    dependencies
        .iter()
        .map(|dependency| {
            maven_scope(dependency.scope)
                .map(|scope| (dependency, scope))
                .ok_or_else(|| RenderError::UnmappedScope {
                    scope: dependency.scope,
                    tool: BuildSystem::Maven,
                    dependency: dependency.id.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_table() {
        assert_eq!(maven_scope(DependencyScope::Compile).unwrap().scope, None);
        assert!(maven_scope(DependencyScope::AnnotationProcessor).unwrap().optional);
        assert_eq!(
            maven_scope(DependencyScope::ProvidedRuntime).unwrap().scope,
            Some("provided")
        );
        let dev = maven_scope(DependencyScope::DevelopmentOnly).unwrap();
        assert_eq!((dev.scope, dev.optional), (Some("runtime"), true));
        assert_eq!(
            maven_scope(DependencyScope::TestRuntime).unwrap().scope,
            Some("test")
        );
        assert_eq!(maven_scope(DependencyScope::Import), None);
    }

    #[test]
    fn test_resolve_reports_unmapped_scope() {
        let deps = [
            Dependency::new("web", "g", "web", DependencyScope::Compile),
            Dependency::new("bom", "g", "bom", DependencyScope::Import),
        ];
        assert_eq!(
            resolve(&deps).unwrap_err(),
            RenderError::UnmappedScope {
                scope: DependencyScope::Import,
                tool: BuildSystem::Maven,
                dependency: "bom".to_string(),
            }
        );
    }
}
