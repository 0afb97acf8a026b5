//! HELP.md customizers.

use eyre::Result;
use sprout_codegen::{
    customize::{Customizer, Customizers},
    documentation::HelpDocument,
};
use sprout_manifest::{DependencyConfig, ProjectDescription};

/// Guides and reference documentation declared by the dependencies, in
/// declaration order.
#[derive(Debug, Clone)]
pub struct DependencyLinks {
    dependencies: Vec<DependencyConfig>,
}

impl DependencyLinks {
    pub fn new(description: &ProjectDescription) -> Self {
        Self {
            dependencies: description.dependencies.clone(),
        }
    }
}

impl Customizer<HelpDocument> for DependencyLinks {
    fn customize(&self, document: &mut HelpDocument) -> Result<()> {
        let getting_started = document.getting_started();
        for dependency in &self.dependencies {
            for link in &dependency.guides {
                getting_started.add_guide_link(&link.href, &link.label);
            }
            for link in &dependency.reference {
                getting_started.add_reference_doc_link(&link.href, &link.label);
            }
        }
        Ok(())
    }
}

/// The help document customizers `description` asks for.
pub fn help_customizers(description: &ProjectDescription) -> Customizers<HelpDocument> {
    let mut customizers = Customizers::new();
    customizers.register(DependencyLinks::new(description));
    customizers
}
