use sprout_codegen::{
    build::BuildCustomizers, customize::Customizers, documentation::HelpDocument,
};
use sprout_manifest::ProjectDescription;

use crate::{
    build::build_customizers,
    code::{SourceCustomizers, source_customizers},
    documentation::help_customizers,
};

/// Every customizer registry of a generation run.
///
/// [`ProjectCustomizers::for_project`] registers the defaults; hosts may
/// register more before generating.
#[derive(Debug, Default)]
pub struct ProjectCustomizers {
    pub build: BuildCustomizers,
    pub source: SourceCustomizers,
    pub help: Customizers<HelpDocument>,
}

impl ProjectCustomizers {
    pub fn for_project(description: &ProjectDescription) -> Self {
        Self {
            build: build_customizers(description),
            source: source_customizers(description),
            help: help_customizers(description),
        }
    }
}
