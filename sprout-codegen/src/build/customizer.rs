use eyre::Result;
use sprout_core::BuildSystem;

use super::{Build, GradleBuild, MavenBuild};
use crate::customize::{self, Customizer};

/// A concrete build model that build customizers can target.
pub trait BuildModel {
    /// The build system this model renders to.
    const SYSTEM: BuildSystem;

    fn build_mut(&mut self) -> &mut Build;

    fn maven_mut(&mut self) -> Option<&mut MavenBuild> {
        None
    }

    fn gradle_mut(&mut self) -> Option<&mut GradleBuild> {
        None
    }
}

impl BuildModel for MavenBuild {
    const SYSTEM: BuildSystem = BuildSystem::Maven;

    fn build_mut(&mut self) -> &mut Build {
        self
    }

    fn maven_mut(&mut self) -> Option<&mut MavenBuild> {
        Some(self)
    }
}

impl BuildModel for GradleBuild {
    const SYSTEM: BuildSystem = BuildSystem::Gradle;

    fn build_mut(&mut self) -> &mut Build {
        self
    }

    fn gradle_mut(&mut self) -> Option<&mut GradleBuild> {
        Some(self)
    }
}

/// A build customizer tagged with the build variant it targets.
pub enum BuildCustomizer {
    /// Applies to every build.
    Any(Box<dyn Customizer<Build>>),
    /// Applies to Maven builds only.
    Maven(Box<dyn Customizer<MavenBuild>>),
    /// Applies to Gradle builds only.
    Gradle(Box<dyn Customizer<GradleBuild>>),
}

impl BuildCustomizer {
    pub fn order(&self) -> i32 {
        match self {
            BuildCustomizer::Any(c) => c.order(),
            BuildCustomizer::Maven(c) => c.order(),
            BuildCustomizer::Gradle(c) => c.order(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BuildCustomizer::Any(c) => c.name(),
            BuildCustomizer::Maven(c) => c.name(),
            BuildCustomizer::Gradle(c) => c.name(),
        }
    }

    /// Whether this customizer targets builds of `system`.
    pub fn applies_to(&self, system: BuildSystem) -> bool {
        match self {
            BuildCustomizer::Any(_) => true,
            BuildCustomizer::Maven(_) => system == BuildSystem::Maven,
            BuildCustomizer::Gradle(_) => system == BuildSystem::Gradle,
        }
    }

    fn apply<B: BuildModel>(&self, build: &mut B) -> Result<()> {
        match self {
            BuildCustomizer::Any(c) => customize::apply(c.as_ref(), build.build_mut()),
            BuildCustomizer::Maven(c) => match build.maven_mut() {
                Some(maven) => customize::apply(c.as_ref(), maven),
                None => Ok(()),
            },
            BuildCustomizer::Gradle(c) => match build.gradle_mut() {
                Some(gradle) => customize::apply(c.as_ref(), gradle),
                None => Ok(()),
            },
        }
    }
}

/// The registry of build customizers for one generation.
///
/// ```
/// use sprout_codegen::build::{Build, BuildCustomizers, GradleBuild, MavenBuild};
/// use sprout_codegen::customize::FnCustomizer;
///
/// let mut customizers = BuildCustomizers::new();
/// customizers
///     .any(FnCustomizer::new("group", |b: &mut Build| {
///         b.set_group("com.example");
///         Ok(())
///     }))
///     .maven(FnCustomizer::new("parent", |b: &mut MavenBuild| {
///         b.set_parent("org.example", "parent", "1.0");
///         Ok(())
///     }));
///
/// let mut gradle = GradleBuild::new();
/// customizers.customize(&mut gradle).unwrap();
/// assert_eq!(gradle.group(), Some("com.example"));
///
/// let mut maven = MavenBuild::new();
/// customizers.customize(&mut maven).unwrap();
/// assert!(maven.parent().is_some());
/// ```
#[derive(Default)]
pub struct BuildCustomizers {
    entries: Vec<BuildCustomizer>,
}

impl BuildCustomizers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, customizer: BuildCustomizer) -> &mut Self {
        self.entries.push(customizer);
        self
    }

    /// Register a customizer for every build.
    pub fn any(&mut self, customizer: impl Customizer<Build> + 'static) -> &mut Self {
        self.register(BuildCustomizer::Any(Box::new(customizer)))
    }

    /// Register a customizer for Maven builds.
    pub fn maven(&mut self, customizer: impl Customizer<MavenBuild> + 'static) -> &mut Self {
        self.register(BuildCustomizer::Maven(Box::new(customizer)))
    }

    /// Register a customizer for Gradle builds.
    pub fn gradle(&mut self, customizer: impl Customizer<GradleBuild> + 'static) -> &mut Self {
        self.register(BuildCustomizer::Gradle(Box::new(customizer)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Customizers compatible with `system`, in application order.
    pub fn ordered_for(&self, system: BuildSystem) -> Vec<&BuildCustomizer> {
        let mut ordered: Vec<_> = self
            .entries
            .iter()
            .filter(|c| c.applies_to(system))
            .collect();
        ordered.sort_by_key(|c| c.order());
        ordered
    }

    /// Apply every compatible customizer once, in ascending order key.
    ///
    /// # Errors
    ///
    /// Stops at the first failing customizer; the error names it.
    pub fn customize<B: BuildModel>(&self, build: &mut B) -> Result<()> {
        for customizer in self.ordered_for(B::SYSTEM) {
            customizer.apply(build)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BuildCustomizers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|c| (c.name(), c.order())))
            .finish()
    }
}
