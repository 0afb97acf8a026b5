//! File registration for declarative project generation.
//!
//! Contributors render their files into a [`FileRegistry`]; nothing touches the
//! disk until every file has been rendered, and then every entry is written
//! atomically.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::build("pom.xml", pom));
//! registry.register(FileEntry::source("src/main/java/com/example/demo/DemoApplication.java", main));
//! registry.register(FileEntry::wrapper("mvnw", script).executable());
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::path::Path;

use eyre::Result;
use serde::Serialize;
use sprout_core::{FileRules, GeneratedFile, Overwrite, WriteResult, write_with_rules};

/// Kind of generated file. The declaration order is the write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// pom.xml, build.gradle, settings.gradle.
    Build,
    /// Build tool wrappers and their properties.
    Wrapper,
    /// Application and test sources.
    Source,
    /// Resources the user is expected to edit (application.properties).
    /// Only written if missing.
    Resource,
    /// HELP.md, .gitignore and similar.
    Documentation,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Build => "build",
            FileCategory::Wrapper => "wrapper",
            FileCategory::Source => "source",
            FileCategory::Resource => "resource",
            FileCategory::Documentation => "documentation",
        }
    }

    /// Resources belong to the user once written; everything else is regenerated.
    pub fn default_overwrite(&self) -> Overwrite {
        match self {
            FileCategory::Resource => Overwrite::IfMissing,
            _ => Overwrite::Always,
        }
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path below the output directory, `/`-separated.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
    /// Replaces the category's overwrite behavior when set.
    pub overwrite: Option<Overwrite>,
    /// Set the executable bits once written.
    pub executable: bool,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: None,
            executable: false,
        }
    }

    pub fn build(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Build)
    }

    pub fn wrapper(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Wrapper)
    }

    pub fn source(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Source)
    }

    pub fn resource(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Resource)
    }

    pub fn documentation(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Documentation)
    }

    /// Render a [`GeneratedFile`], carrying over its header, overwrite
    /// behavior and executable flag.
    pub fn from_generated<F: GeneratedFile>(
        path: impl Into<String>,
        file: &F,
        category: FileCategory,
    ) -> Self {
        let FileRules {
            overwrite,
            header,
            executable,
        } = file.rules();
        let content = match header {
            Some(header) => format!("{header}\n{}", file.render()),
            None => file.render(),
        };
        Self {
            overwrite: Some(overwrite),
            executable,
            ..Self::new(path, content, category)
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
            .unwrap_or_else(|| self.category.default_overwrite())
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        // The header, if any, is already part of the content.
        let rules = FileRules {
            overwrite: self.overwrite(),
            header: None,
            executable: self.executable,
        };
        write_with_rules(&base.join(&self.path), &self.content, &rules)
    }
}

/// Files rendered by the contributors, written in one pass.
///
/// Entries come out grouped by category in the order of [`FileCategory`],
/// keeping registration order within a category.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Entries in write order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Path, content and category of every entry, in write order.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write every entry below `base`.
    ///
    /// # Errors
    ///
    /// Stops at the first file that cannot be written.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();
        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        tracing::info!(
            written = stats.written,
            skipped = stats.skipped,
            directory = %base.display(),
            "wrote project files"
        );
        Ok(stats)
    }
}

/// A file as shown by a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

/// Outcome of [`FileRegistry::write_all`].
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    /// Files left alone because they already existed.
    pub skipped: usize,
    pub written_paths: Vec<String>,
    pub skipped_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_entry_categories() {
        let build = FileEntry::build("pom.xml", "");
        assert_eq!(build.category, FileCategory::Build);
        assert_eq!(build.overwrite(), Overwrite::Always);

        let resource = FileEntry::resource("src/main/resources/application.properties", "");
        assert_eq!(resource.category, FileCategory::Resource);
        assert_eq!(resource.overwrite(), Overwrite::IfMissing);
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::documentation("HELP.md", ""));
        registry.register(FileEntry::source("Demo.java", ""));
        registry.register(FileEntry::build("pom.xml", ""));
        registry.register(FileEntry::wrapper("mvnw", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["pom.xml", "mvnw", "Demo.java", "HELP.md"]);
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::build("pom.xml", "<project/>"));
        registry.register(FileEntry::resource(
            "src/main/resources/application.properties",
            "",
        ));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(stats.skipped, 0);
        assert!(temp.path().join("pom.xml").exists());
        assert!(
            temp.path()
                .join("src/main/resources/application.properties")
                .exists()
        );
    }

    #[test]
    fn test_resource_skipped_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("application.properties");

        std::fs::write(&path, "server.port=9000").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::resource("application.properties", ""));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.skipped_paths, ["application.properties"]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "server.port=9000");
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_entry() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::wrapper("gradlew", "#!/bin/sh\n").executable());
        registry.write_all(temp.path()).unwrap();

        let mode = std::fs::metadata(temp.path().join("gradlew"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_from_generated_keeps_rules() {
        struct Script;

        impl GeneratedFile for Script {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("mvnw")
            }

            fn rules(&self) -> FileRules {
                FileRules {
                    header: Some("#!/bin/sh"),
                    ..FileRules::if_missing().executable()
                }
            }

            fn render(&self) -> String {
                "exec mvn \"$@\"\n".to_string()
            }
        }

        let entry = FileEntry::from_generated("mvnw", &Script, FileCategory::Wrapper);
        assert_eq!(entry.content, "#!/bin/sh\nexec mvn \"$@\"\n");
        assert_eq!(entry.overwrite(), Overwrite::IfMissing);
        assert!(entry.executable);
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::source("b.java", "content b"));
        registry.register(FileEntry::build("a.xml", "content a"));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, "a.xml");
        assert_eq!(preview[1].path, "b.java");
        assert_eq!(preview[1].content, "content b");
        assert_eq!(preview[1].category, FileCategory::Source);
    }
}
