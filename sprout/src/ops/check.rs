//! Check operation - resolve a manifest without writing anything.

use std::path::Path;

use eyre::{Context, Result};
use sprout_manifest::ProjectDescription;
use sprout_project::ProjectGenerator;

use crate::reports::CheckReport;

/// Render every file of the project in memory and report what would be
/// generated.
///
/// Parsing already validated the manifest; rendering additionally catches
/// dependency scopes the chosen build tool cannot express.
pub fn check(description: ProjectDescription, config_path: &Path) -> Result<CheckReport> {
    let generator = ProjectGenerator::new(description);
    let plan = generator.plan().wrap_err("validation failed")?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        project: plan.project.clone(),
        files: plan.files,
    })
}
