use eyre::Result;
use sprout_codegen::{
    build::{Build, Repository},
    customize::Customizer,
};
use sprout_core::Version;

/// Repositories needed to resolve the platform.
///
/// Maven Central is always added. Milestones, release candidates and
/// snapshots also need the Spring snapshot and milestone repositories, for
/// both dependencies and plugins.
#[derive(Debug, Clone)]
pub struct PlatformRepositories {
    platform_version: Version,
}

impl PlatformRepositories {
    pub fn new(platform_version: Version) -> Self {
        Self { platform_version }
    }

    pub fn spring_snapshots() -> Repository {
        Repository::new(
            "spring-snapshots",
            "Spring Snapshots",
            "https://repo.spring.io/snapshot",
        )
        .with_snapshots(true)
    }

    pub fn spring_milestones() -> Repository {
        Repository::new(
            "spring-milestones",
            "Spring Milestones",
            "https://repo.spring.io/milestone",
        )
    }
}

impl Customizer<Build> for PlatformRepositories {
    fn customize(&self, build: &mut Build) -> Result<()> {
        build.add_repository(Repository::maven_central());
        if !self.platform_version.is_release() {
            for repository in [Self::spring_snapshots(), Self::spring_milestones()] {
                build.add_repository(repository.clone());
                build.add_plugin_repository(repository);
            }
        }
        Ok(())
    }
}
