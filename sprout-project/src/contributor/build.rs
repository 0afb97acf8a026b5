use eyre::Result;
use sprout_codegen::{
    build::{GradleBuild, MavenBuild},
    generation::{FileCategory, FileEntry, FileRegistry},
};
use sprout_codegen_gradle::{GradleBuildWriter, GradleSettingsWriter};
use sprout_codegen_maven::MavenBuildWriter;
use sprout_core::BuildSystem;

use super::{ProjectContext, ProjectContributor, generated_entry};

/// `pom.xml`, or `build.gradle` and `settings.gradle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildFileContributor;

impl ProjectContributor for BuildFileContributor {
    fn name(&self) -> &'static str {
        "build-file"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        match ctx.description.build_system {
            BuildSystem::Maven => {
                let mut build = MavenBuild::new();
                ctx.customizers.build.customize(&mut build)?;
                let pom = MavenBuildWriter::new(ctx.styles).write(&build)?;
                registry.register(FileEntry::build("pom.xml", pom));
            }
            BuildSystem::Gradle => {
                let mut build = GradleBuild::new();
                ctx.customizers.build.customize(&mut build)?;
                let script = GradleBuildWriter::new(ctx.styles).write(&build)?;
                let settings = GradleSettingsWriter::new(ctx.styles).write(&build);
                registry.register(FileEntry::build("build.gradle", script));
                registry.register(FileEntry::build("settings.gradle", settings));
            }
        }
        Ok(())
    }
}

/// The wrapper script of the build tool and its properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildWrapperContributor;

impl ProjectContributor for BuildWrapperContributor {
    fn name(&self) -> &'static str {
        "build-wrapper"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        use sprout_codegen_gradle::files as gradle;
        use sprout_codegen_maven::files as maven;

        match ctx.description.build_system {
            BuildSystem::Maven => {
                registry.register(generated_entry(&maven::Mvnw, FileCategory::Wrapper));
                registry.register(generated_entry(
                    &maven::MavenWrapperProperties::default(),
                    FileCategory::Wrapper,
                ));
            }
            BuildSystem::Gradle => {
                registry.register(generated_entry(&gradle::Gradlew, FileCategory::Wrapper));
                registry.register(generated_entry(
                    &gradle::GradleWrapperProperties::default(),
                    FileCategory::Wrapper,
                ));
            }
        }
        Ok(())
    }
}

/// The `.gitignore` of the build tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIgnoreContributor;

impl ProjectContributor for GitIgnoreContributor {
    fn name(&self) -> &'static str {
        "gitignore"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        let entry = match ctx.description.build_system {
            BuildSystem::Maven => generated_entry(
                &sprout_codegen_maven::files::GitIgnore,
                FileCategory::Documentation,
            ),
            BuildSystem::Gradle => generated_entry(
                &sprout_codegen_gradle::files::GitIgnore,
                FileCategory::Documentation,
            ),
        };
        registry.register(entry);
        Ok(())
    }
}
