use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// A file with a fixed location, such as a wrapper script or a `.gitignore`.
pub trait GeneratedFile {
    /// Where the file goes below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String;

    /// Render and write below `base`.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

/// Write `content` to `path` honouring the given rules.
pub fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {}
        Overwrite::IfMissing if path.exists() => {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }
        Overwrite::IfMissing => {}
    }

    match rules.header {
        Some(header) => write_file(path, &format!("{header}\n{content}"))?,
        None => write_file(path, content)?,
    }
    if rules.executable {
        make_executable(path)?;
    }
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(WriteResult::Written)
}

/// Write a file atomically.
///
/// The content goes to a temporary file next to the destination which is then
/// renamed over it, so a failure never leaves a truncated file behind.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("failed to create temporary file in '{}'", parent.display()))?;
    tmp.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    relax_permissions(tmp.as_file())?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("failed to move file into place at '{}'", path.display()))?;
    Ok(())
}

// Temporary files are created owner-only; generated sources should not be.
#[cfg(unix)]
fn relax_permissions(file: &std::fs::File) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(std::fs::Permissions::from_mode(0o644))?;
    Ok(())
}

#[cfg(not(unix))]
fn relax_permissions(_file: &std::fs::File) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions)
        .wrap_err_with(|| format!("failed to mark '{}' executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// What [`write_with_rules`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file existed and the rules kept it.
    Skipped,
}

/// How a generated file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Line written before the content, e.g. a shebang.
    pub header: Option<&'static str>,
    /// Set the executable bits after writing (wrapper scripts).
    pub executable: bool,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self::default()
    }

    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            ..Self::default()
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
            executable: false,
        }
    }
}

/// Whether an existing file is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Regenerated every time (build files, sources).
    Always,
    /// Written once, then owned by the user.
    IfMissing,
}
