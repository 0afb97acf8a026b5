//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, WrittenResult};
pub use output::{Report, TerminalOutput};

use sprout_manifest::ProjectDescription;

/// `demo 0.0.1-SNAPSHOT (java, maven, jar) on Spring Boot 2.1.0.RELEASE`
fn project_line(project: &ProjectDescription) -> String {
    format!(
        "{} {} ({}, {}, {}) on Spring Boot {}",
        project.name,
        project.version,
        project.language,
        project.build_system,
        project.packaging,
        project.platform_version
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
