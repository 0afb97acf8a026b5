use eyre::Result;
use sprout_codegen::{
    documentation::HelpDocument,
    generation::{FileEntry, FileRegistry},
};

use super::{ProjectContext, ProjectContributor};

/// `HELP.md`, registered only when the customized document has content.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpDocumentContributor;

impl ProjectContributor for HelpDocumentContributor {
    fn name(&self) -> &'static str {
        "help-document"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        let mut document = HelpDocument::new();
        ctx.customizers.help.customize(&mut document)?;
        match document.render() {
            Some(content) => registry.register(FileEntry::documentation("HELP.md", content)),
            None => tracing::debug!("help document is empty, skipping HELP.md"),
        }
        Ok(())
    }
}
