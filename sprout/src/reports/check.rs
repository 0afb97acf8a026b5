//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use sprout_manifest::ProjectDescription;
use sprout_project::PlannedFile;

use super::{
    output::{Output, Report},
    plural, project_line,
};

/// A valid manifest and the files it resolves to.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub project: ProjectDescription,
    pub files: Vec<PlannedFile>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let project = &self.project;
        out.preformatted(&project_line(project));
        out.key_value("Coordinates", &format!("{}:{}", project.group, project.artifact));
        out.key_value("Package", &project.package_name);
        out.key_value("Application", &project.application_name);
        out.newline();

        if !project.dependencies.is_empty() {
            out.section(&plural(
                project.dependencies.len(),
                "dependency",
                "dependencies",
            ));
            for dependency in &project.dependencies {
                out.list_item(&format!(
                    "{} ({}:{}, {})",
                    dependency.id, dependency.group, dependency.artifact, dependency.scope
                ));
            }
            out.newline();
        }

        out.section(&plural(self.files.len(), "file", "files"));
        for file in &self.files {
            let mut line = format!("{:<14}{}", file.category.as_str(), file.path);
            if file.executable {
                line.push_str(" (executable)");
            }
            out.list_item(&line);
        }
    }
}
