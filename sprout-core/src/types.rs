//! Fundamental project attributes shared across the workspace.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported source languages for generated projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Kotlin,
    Groovy,
}

impl Language {
    /// Returns the language identifier, also used as its indent content kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Groovy => "groovy",
        }
    }

    /// File extension of source files in this language.
    pub fn source_extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kt",
            Language::Groovy => "groovy",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "groovy" => Ok(Language::Groovy),
            _ => Err(format!(
                "unknown language '{}', expected 'java', 'kotlin' or 'groovy'",
                s
            )),
        }
    }
}

/// Supported build systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Maven,
    Gradle,
}

impl BuildSystem {
    /// Returns the build system identifier, also used as its indent content kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSystem::Maven => "maven",
            BuildSystem::Gradle => "gradle",
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven" | "mvn" => Ok(BuildSystem::Maven),
            "gradle" => Ok(BuildSystem::Gradle),
            _ => Err(format!(
                "unknown build system '{}', expected 'maven' or 'gradle'",
                s
            )),
        }
    }
}

/// Packaging of the built artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    #[default]
    Jar,
    War,
}

impl Packaging {
    pub fn as_str(&self) -> &'static str {
        match self {
            Packaging::Jar => "jar",
            Packaging::War => "war",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Packaging {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jar" => Ok(Packaging::Jar),
            "war" => Ok(Packaging::War),
            _ => Err(format!("unknown packaging '{}', expected 'jar' or 'war'", s)),
        }
    }
}

/// Scope of a build dependency, mapped to a native keyword by each build tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyScope {
    #[default]
    Compile,
    Runtime,
    ProvidedRuntime,
    AnnotationProcessor,
    CompileOnly,
    DevelopmentOnly,
    TestCompile,
    TestRuntime,
    /// Bill-of-materials import. No build tool maps it to a dependency line.
    Import,
}

impl DependencyScope {
    pub const ALL: [DependencyScope; 9] = [
        DependencyScope::Compile,
        DependencyScope::Runtime,
        DependencyScope::ProvidedRuntime,
        DependencyScope::AnnotationProcessor,
        DependencyScope::CompileOnly,
        DependencyScope::DevelopmentOnly,
        DependencyScope::TestCompile,
        DependencyScope::TestRuntime,
        DependencyScope::Import,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyScope::Compile => "compile",
            DependencyScope::Runtime => "runtime",
            DependencyScope::ProvidedRuntime => "provided-runtime",
            DependencyScope::AnnotationProcessor => "annotation-processor",
            DependencyScope::CompileOnly => "compile-only",
            DependencyScope::DevelopmentOnly => "development-only",
            DependencyScope::TestCompile => "test-compile",
            DependencyScope::TestRuntime => "test-runtime",
            DependencyScope::Import => "import",
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DependencyScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DependencyScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("unknown dependency scope '{}'", s))
    }
}
