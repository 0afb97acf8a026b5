use std::path::Path;

use eyre::{Result, WrapErr};
use serde::Serialize;
use sprout_codegen::{
    builder::IndentStyles,
    generation::{FileCategory, FileRegistry, PreviewEntry, WriteStats},
};
use sprout_manifest::{IndentConfig, ProjectDescription};

use crate::{
    ProjectCustomizers,
    contributor::{ProjectContext, ProjectContributor, default_contributors},
};

/// Generates a project from its description.
///
/// Every file is rendered before anything is written: a failing customizer
/// or an unmapped dependency scope leaves the output directory untouched.
///
/// # Example
///
/// ```ignore
/// let description = SproutToml::open("sprout.toml")?.description();
/// let stats = ProjectGenerator::new(description).generate(Path::new("demo"))?;
/// ```
pub struct ProjectGenerator {
    description: ProjectDescription,
    styles: IndentStyles,
    customizers: ProjectCustomizers,
    contributors: Vec<Box<dyn ProjectContributor>>,
}

impl ProjectGenerator {
    /// A generator with the default customizers and contributors.
    pub fn new(description: ProjectDescription) -> Self {
        let styles = indent_styles(&description.indent);
        let customizers = ProjectCustomizers::for_project(&description);
        Self {
            description,
            styles,
            customizers,
            contributors: default_contributors(),
        }
    }

    pub fn description(&self) -> &ProjectDescription {
        &self.description
    }

    pub fn styles(&self) -> &IndentStyles {
        &self.styles
    }

    /// Registries to add customizers to before generating.
    pub fn customizers_mut(&mut self) -> &mut ProjectCustomizers {
        &mut self.customizers
    }

    /// Add a contributor, run after the default ones.
    pub fn contributor(mut self, contributor: impl ProjectContributor + 'static) -> Self {
        self.contributors.push(Box::new(contributor));
        self
    }

    /// Run every contributor and collect the rendered files.
    ///
    /// # Errors
    ///
    /// Fails on the first contributor error, naming the contributor.
    pub fn render(&self) -> Result<FileRegistry> {
        tracing::info!(
            artifact = %self.description.artifact,
            build = %self.description.build_system,
            language = %self.description.language,
            platform = %self.description.platform_version,
            "generating project"
        );
        let ctx = ProjectContext {
            description: &self.description,
            styles: &self.styles,
            customizers: &self.customizers,
        };
        let mut registry = FileRegistry::new();
        for contributor in &self.contributors {
            let name = contributor.name();
            tracing::debug!(contributor = name, "running contributor");
            contributor
                .contribute(&ctx, &mut registry)
                .wrap_err_with(|| format!("contributor '{}' failed", name))?;
        }
        Ok(registry)
    }

    /// The files that would be generated, without writing anything.
    pub fn preview(&self) -> Result<Vec<PreviewEntry>> {
        Ok(self.render()?.preview())
    }

    /// The resolved project and the files generation would produce.
    pub fn plan(&self) -> Result<GenerationPlan<'_>> {
        let files = self
            .render()?
            .entries()
            .map(|entry| PlannedFile {
                path: entry.path.clone(),
                category: entry.category,
                executable: entry.executable,
                lines: entry.content.lines().count(),
            })
            .collect();
        Ok(GenerationPlan {
            project: &self.description,
            files,
        })
    }

    /// Render every file, then write them below `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        let registry = self.render()?;
        registry.write_all(output_dir)
    }
}

/// Indentation per content kind from the `[indent]` table.
pub fn indent_styles(config: &IndentConfig) -> IndentStyles {
    let mut styles = IndentStyles::new(config.default);
    for (kind, indent) in config.overrides() {
        styles.set(kind, indent);
    }
    styles
}

/// Output of [`ProjectGenerator::plan`].
#[derive(Debug, Serialize)]
pub struct GenerationPlan<'a> {
    pub project: &'a ProjectDescription,
    pub files: Vec<PlannedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub path: String,
    pub category: FileCategory,
    pub executable: bool,
    pub lines: usize,
}
