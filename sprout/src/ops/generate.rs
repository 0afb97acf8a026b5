//! Generate operation - write a project from its description.

use std::path::Path;

use eyre::{Context, Result};
use sprout_manifest::ProjectDescription;
use sprout_project::ProjectGenerator;

use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the project is written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

pub fn generate(description: ProjectDescription, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = ProjectGenerator::new(description);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview().wrap_err("failed to render project")?)
    } else {
        let stats = generator
            .generate(opts.output_dir)
            .wrap_err("failed to generate project")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written_paths,
            kept: stats.skipped_paths,
        })
    };

    Ok(GenerateReport {
        project: generator.description().clone(),
        result,
    })
}
