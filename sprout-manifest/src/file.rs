use std::path::{Path, PathBuf};

use crate::{Error, Manifest, ProjectDescription, Result};

/// A sprout.toml on disk with both raw content and parsed manifest.
pub struct SproutToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SproutToml {
    /// Open and parse a sprout.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The project description with defaults applied.
    pub fn description(&self) -> ProjectDescription {
        ProjectDescription::from(&self.manifest)
    }
}
