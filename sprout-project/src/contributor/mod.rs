//! Contributors turn the customized models into files.

mod build;
mod help;
mod resources;
mod source;

use std::path::Path;

pub use build::{BuildFileContributor, BuildWrapperContributor, GitIgnoreContributor};
use eyre::Result;
pub use help::HelpDocumentContributor;
pub use resources::{APPLICATION_PROPERTIES, ApplicationPropertiesContributor};
pub use source::{MainSourceContributor, TestSourceContributor};
use sprout_codegen::{
    builder::IndentStyles,
    generation::{FileCategory, FileEntry, FileRegistry},
};
use sprout_core::GeneratedFile;
use sprout_manifest::ProjectDescription;

use crate::ProjectCustomizers;

/// What a contributor sees of the run.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext<'a> {
    pub description: &'a ProjectDescription,
    pub styles: &'a IndentStyles,
    pub customizers: &'a ProjectCustomizers,
}

/// Registers files for one aspect of the project.
///
/// Contributors only render into the registry; nothing is written until
/// every contributor has run.
pub trait ProjectContributor {
    /// The name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Render this contributor's files into `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a customizer or renderer fails.
    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()>;
}

/// The contributors of a standard project, in the order they run.
pub fn default_contributors() -> Vec<Box<dyn ProjectContributor>> {
    vec![
        Box::new(BuildFileContributor),
        Box::new(BuildWrapperContributor),
        Box::new(GitIgnoreContributor),
        Box::new(MainSourceContributor),
        Box::new(TestSourceContributor),
        Box::new(ApplicationPropertiesContributor),
        Box::new(HelpDocumentContributor),
    ]
}

/// Registry entry for a [`GeneratedFile`], keeping its rules.
fn generated_entry<F: GeneratedFile>(file: &F, category: FileCategory) -> FileEntry {
    let path = file.path(Path::new(""));
    FileEntry::from_generated(path.to_string_lossy(), file, category)
}
