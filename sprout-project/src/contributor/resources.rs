use eyre::Result;
use sprout_codegen::generation::{FileEntry, FileRegistry};

use super::{ProjectContext, ProjectContributor};

pub const APPLICATION_PROPERTIES: &str = "src/main/resources/application.properties";

/// An empty `application.properties`, kept when it already exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationPropertiesContributor;

impl ProjectContributor for ApplicationPropertiesContributor {
    fn name(&self) -> &'static str {
        "application-properties"
    }

    fn contribute(&self, _ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        registry.register(FileEntry::resource(APPLICATION_PROPERTIES, ""));
        Ok(())
    }
}
