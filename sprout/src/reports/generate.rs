//! Generate command report data structures.

use std::path::PathBuf;

use sprout_codegen::generation::PreviewEntry;
use sprout_manifest::ProjectDescription;

use super::{
    output::{Output, Report},
    plural, project_line,
};

/// Report data from project generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub project: ProjectDescription,
    pub result: GenerationResult,
}

/// Result of project generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewEntry>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub kept: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&project_line(&self.project));
        out.preformatted(&self.project.description);
        out.newline();

        out.section(&format!(
            "Generated {} in {}",
            plural(written.written.len(), "file", "files"),
            written.output_dir.display()
        ));
        for path in &written.written {
            out.added_item(path);
        }

        if !written.kept.is_empty() {
            out.newline();
            out.section("Kept existing");
            for path in &written.kept {
                out.kept_item(path);
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewEntry]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} would be generated", plural(files.len(), "file", "files")));
}
