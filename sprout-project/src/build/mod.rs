//! Default build customizers.
//!
//! [`build_customizers`] assembles the registry for one project: customizers
//! every build receives, then the ones selected by the [`conditions`](crate::conditions).

mod defaults;
mod groovy;
mod kotlin;
mod repositories;
mod restdocs;

pub use defaults::{
    DeclaredDependencies, GradleDefaults, MavenDefaults, ProjectCoordinates, WarPackaging,
    WarPlugin,
};
pub use groovy::{GMAVENPLUS_VERSION, GroovyDependency, GroovyMavenBuild};
pub use kotlin::{KOTLIN_VERSION, KotlinDependencies, KotlinGradleBuild, KotlinMavenBuild};
pub use repositories::PlatformRepositories;
pub use restdocs::{ASCIIDOCTOR_VERSION, RestDocsGradleBuild, RestDocsMavenBuild};
use sprout_codegen::build::{BuildCustomizers, Dependency, DependencyScope};
use sprout_core::Language;
use sprout_manifest::ProjectDescription;

use crate::conditions;

/// Group of the Spring Boot starters and plugins.
pub const SPRING_BOOT_GROUP: &str = "org.springframework.boot";

pub(crate) fn boot_starter(id: &str, artifact: &str, scope: DependencyScope) -> Dependency {
    Dependency::new(id, SPRING_BOOT_GROUP, artifact, scope)
}

/// The build customizers `description` asks for, in registration order.
pub fn build_customizers(description: &ProjectDescription) -> BuildCustomizers {
    let mut customizers = BuildCustomizers::new();
    customizers
        .any(ProjectCoordinates::new(description))
        .any(DeclaredDependencies::new(description))
        .any(PlatformRepositories::new(description.platform_version.clone()))
        .maven(MavenDefaults::new(description))
        .gradle(GradleDefaults::new(description));

    match description.language {
        Language::Java => {}
        Language::Kotlin => {
            customizers
                .any(KotlinDependencies::new(description))
                .maven(KotlinMavenBuild::new(description))
                .gradle(KotlinGradleBuild::new(description));
        }
        Language::Groovy => {
            customizers
                .any(GroovyDependency)
                .maven(GroovyMavenBuild);
        }
    }

    if conditions::is_war(description) {
        customizers
            .any(WarPackaging)
            .gradle(WarPlugin);
    }

    if conditions::has_dependency(description, "restdocs") {
        customizers
            .maven(RestDocsMavenBuild)
            .gradle(RestDocsGradleBuild);
    }

    tracing::debug!(count = customizers.len(), "assembled build customizers");
    customizers
}
