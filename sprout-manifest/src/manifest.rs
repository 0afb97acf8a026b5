//! Schema of sprout.toml.

use serde::{Deserialize, Serialize};
use sprout_core::{BuildSystem, DependencyScope, Indent, Language, Packaging, Version};

/// Root of sprout.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectConfig,

    #[serde(default)]
    pub dependencies: Vec<DependencyConfig>,

    #[serde(default)]
    pub indent: IndentConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    pub group: String,
    pub artifact: String,
    /// Defaults to the artifact.
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    /// Defaults to `group.artifact`, sanitized.
    pub package: Option<String>,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_build")]
    pub build: BuildSystem,
    #[serde(default)]
    pub packaging: Packaging,
    #[serde(default = "default_java_version")]
    pub java_version: String,
    #[serde(default = "default_platform_version")]
    pub platform_version: Version,
}

pub const DEFAULT_DESCRIPTION: &str = "Demo project for Spring Boot";
pub const DEFAULT_PLATFORM_VERSION: &str = "2.1.0.RELEASE";

fn default_version() -> String {
    "0.0.1-SNAPSHOT".to_string()
}

fn default_language() -> Language {
    Language::Java
}

fn default_build() -> BuildSystem {
    BuildSystem::Maven
}

fn default_java_version() -> String {
    "1.8".to_string()
}

fn default_platform_version() -> Version {
    DEFAULT_PLATFORM_VERSION
        .parse()
        .unwrap_or_else(|_| Version::new(2, 1, 0))
}

/// An entry of `[[dependencies]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyConfig {
    pub id: String,
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub scope: DependencyScope,
    pub version: Option<String>,
    /// Guides listed in HELP.md.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guides: Vec<LinkConfig>,
    /// Reference documentation listed in HELP.md.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<LinkConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    pub href: String,
    pub label: String,
}

/// The `[indent]` table: a default plus optional per-content-kind overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndentConfig {
    #[serde(default)]
    pub default: Indent,
    pub maven: Option<Indent>,
    pub gradle: Option<Indent>,
    pub java: Option<Indent>,
    pub kotlin: Option<Indent>,
    pub groovy: Option<Indent>,
}

impl IndentConfig {
    /// Configured overrides as `(content kind, indent)` pairs.
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, Indent)> + '_ {
        [
            ("maven", self.maven),
            ("gradle", self.gradle),
            ("java", self.java),
            ("kotlin", self.kotlin),
            ("groovy", self.groovy),
        ]
        .into_iter()
        .filter_map(|(kind, indent)| indent.map(|indent| (kind, indent)))
    }
}
