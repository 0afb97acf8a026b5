//! Maven-specific build model.

use std::ops::{Deref, DerefMut};

use super::Build;

/// A [`Build`] plus the parts only a `pom.xml` can express.
#[derive(Debug, Clone, Default)]
pub struct MavenBuild {
    build: Build,
    parent: Option<MavenParent>,
    plugins: Vec<MavenPlugin>,
    source_directory: Option<String>,
    test_source_directory: Option<String>,
}

impl MavenBuild {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self) -> Option<&MavenParent> {
        self.parent.as_ref()
    }

    pub fn set_parent(
        &mut self,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) {
        self.parent = Some(MavenParent {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        });
    }

    pub fn plugins(&self) -> &[MavenPlugin] {
        &self.plugins
    }

    /// The plugin identified by `group:artifact`, added when missing.
    pub fn plugin(
        &mut self,
        group: impl Into<String>,
        artifact: impl Into<String>,
    ) -> &mut MavenPlugin {
        let (group, artifact) = (group.into(), artifact.into());
        let index = match self
            .plugins
            .iter()
            .position(|p| p.group == group && p.artifact == artifact)
        {
            Some(index) => index,
            None => {
                self.plugins.push(MavenPlugin::new(group, artifact));
                self.plugins.len() - 1
            }
        };
        &mut self.plugins[index]
    }

    pub fn source_directory(&self) -> Option<&str> {
        self.source_directory.as_deref()
    }

    pub fn set_source_directory(&mut self, directory: impl Into<String>) {
        self.source_directory = Some(directory.into());
    }

    pub fn test_source_directory(&self) -> Option<&str> {
        self.test_source_directory.as_deref()
    }

    pub fn set_test_source_directory(&mut self, directory: impl Into<String>) {
        self.test_source_directory = Some(directory.into());
    }
}

impl Deref for MavenBuild {
    type Target = Build;

    fn deref(&self) -> &Build {
        &self.build
    }
}

impl DerefMut for MavenBuild {
    fn deref_mut(&mut self) -> &mut Build {
        &mut self.build
    }
}

/// The `<parent>` of a pom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenParent {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

/// A `<plugin>` entry of the `<build>` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenPlugin {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
    executions: Vec<MavenExecution>,
    configuration: Configuration,
    dependencies: Vec<MavenPluginDependency>,
}

impl MavenPlugin {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
            executions: Vec::new(),
            configuration: Configuration::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn executions(&self) -> &[MavenExecution] {
        &self.executions
    }

    /// Customize the execution with `id`, adding it when missing.
    pub fn execution<F>(&mut self, id: impl Into<String>, f: F) -> &mut Self
    where
        F: FnOnce(&mut MavenExecution),
    {
        let id = id.into();
        match self
            .executions
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id.as_str()))
        {
            Some(execution) => f(execution),
            None => {
                let mut execution = MavenExecution::new();
                execution.id = Some(id);
                f(&mut execution);
                self.executions.push(execution);
            }
        }
        self
    }

    /// Append an execution, which may have no id.
    pub fn add_execution(&mut self, execution: MavenExecution) -> &mut Self {
        self.executions.push(execution);
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Configuration),
    {
        f(&mut self.configuration);
        self
    }

    pub fn dependencies(&self) -> &[MavenPluginDependency] {
        &self.dependencies
    }

    pub fn add_dependency(
        &mut self,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<&str>,
    ) -> &mut Self {
        self.dependencies.push(MavenPluginDependency {
            group: group.into(),
            artifact: artifact.into(),
            version: version.map(str::to_string),
        });
        self
    }
}

/// An `<execution>` of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenExecution {
    pub id: Option<String>,
    pub phase: Option<String>,
    pub goals: Vec<String>,
    pub configuration: Configuration,
}

impl MavenExecution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&mut self, phase: impl Into<String>) -> &mut Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn goal(&mut self, goal: impl Into<String>) -> &mut Self {
        self.goals.push(goal.into());
        self
    }

    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Configuration),
    {
        f(&mut self.configuration);
        self
    }
}

/// A `<dependency>` of a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenPluginDependency {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
}

/// An insertion-ordered `<configuration>` tree.
///
/// Names may repeat (`<arg>` lists).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    entries: Vec<(String, ConfigValue)>,
}

/// A value in a [`Configuration`] tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Nested(Configuration),
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text entry.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries
            .push((name.into(), ConfigValue::Text(value.into())));
        self
    }

    /// Customize the nested entry called `name`, adding it when missing.
    pub fn nested<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: FnOnce(&mut Configuration),
    {
        let name = name.into();
        let existing = self.entries.iter_mut().find_map(|(key, value)| match value {
            ConfigValue::Nested(nested) if *key == name => Some(nested),
            _ => None,
        });
        match existing {
            Some(nested) => f(nested),
            None => {
                let mut nested = Configuration::new();
                f(&mut nested);
                self.entries.push((name, ConfigValue::Nested(nested)));
            }
        }
        self
    }

    pub fn entries(&self) -> &[(String, ConfigValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
