use eyre::Result;
use sprout_codegen::{
    generation::{FileEntry, FileRegistry},
    source::SourceCode,
};
use sprout_codegen_jvm::writer_for;

use super::{ProjectContext, ProjectContributor};
use crate::code::{main_source, test_source};

/// The application class, and the servlet initializer of war projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainSourceContributor;

impl ProjectContributor for MainSourceContributor {
    fn name(&self) -> &'static str {
        "main-source"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        let source = main_source(ctx.description, &ctx.customizers.source)?;
        register_units(ctx, &source, "main", registry)
    }
}

/// The application test class.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestSourceContributor;

impl ProjectContributor for TestSourceContributor {
    fn name(&self) -> &'static str {
        "test-source"
    }

    fn contribute(&self, ctx: &ProjectContext<'_>, registry: &mut FileRegistry) -> Result<()> {
        let source = test_source(ctx.description, &ctx.customizers.source)?;
        register_units(ctx, &source, "test", registry)
    }
}

fn register_units(
    ctx: &ProjectContext<'_>,
    source: &SourceCode,
    source_set: &str,
    registry: &mut FileRegistry,
) -> Result<()> {
    let language = ctx.description.language;
    let writer = writer_for(language);
    for unit in source.units() {
        let content = writer.write(unit, ctx.styles)?;
        registry.register(FileEntry::source(
            unit.relative_path(source_set, language),
            content,
        ));
    }
    Ok(())
}
