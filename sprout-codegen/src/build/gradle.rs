//! Gradle-specific build model.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use super::Build;

/// A [`Build`] plus the parts only a `build.gradle` can express.
#[derive(Debug, Clone, Default)]
pub struct GradleBuild {
    build: Build,
    plugins: Vec<GradlePlugin>,
    applied_plugins: Vec<String>,
    ext: IndexMap<String, String>,
    tasks: IndexMap<String, Vec<TaskCustomization>>,
}

impl GradleBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugins of the `plugins { }` block, in insertion order.
    pub fn plugins(&self) -> &[GradlePlugin] {
        &self.plugins
    }

    /// Add a plugin, or update the version of a plugin with the same id.
    pub fn add_plugin(&mut self, id: impl Into<String>, version: Option<&str>) {
        let id = id.into();
        let version = version.map(str::to_string);
        match self.plugins.iter_mut().find(|p| p.id == id) {
            Some(plugin) => {
                if version.is_some() {
                    plugin.version = version;
                }
            }
            None => self.plugins.push(GradlePlugin { id, version }),
        }
    }

    /// Legacy `apply plugin: '<id>'` lines.
    pub fn applied_plugins(&self) -> &[String] {
        &self.applied_plugins
    }

    pub fn apply_plugin(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.applied_plugins.contains(&id) {
            self.applied_plugins.push(id);
        }
    }

    /// `ext { set('<key>', <value>) }` properties. Values are raw Groovy expressions.
    pub fn ext(&self) -> &IndexMap<String, String> {
        &self.ext
    }

    pub fn set_ext(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.ext.insert(key.into(), value.into());
    }

    /// Task customizations keyed by task name, in insertion order.
    pub fn tasks(&self) -> &IndexMap<String, Vec<TaskCustomization>> {
        &self.tasks
    }

    /// Record a customization of the task called `name`.
    ///
    /// Every call appends a new [`TaskCustomization`]; calls for the same task
    /// are grouped under the task's first position.
    pub fn customize_task<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnOnce(&mut TaskCustomization),
    {
        let mut customization = TaskCustomization::default();
        f(&mut customization);
        self.tasks
            .entry(name.into())
            .or_default()
            .push(customization);
    }
}

impl Deref for GradleBuild {
    type Target = Build;

    fn deref(&self) -> &Build {
        &self.build
    }
}

impl DerefMut for GradleBuild {
    fn deref_mut(&mut self) -> &mut Build {
        &mut self.build
    }
}

/// An entry of the `plugins { }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradlePlugin {
    pub id: String,
    pub version: Option<String>,
}

/// An ordered list of statements applied to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCustomization {
    statements: Vec<TaskStatement>,
}

/// A single line of a task customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatement {
    /// `<target> <arg>, <arg>`
    Invocation {
        target: String,
        arguments: Vec<String>,
    },
    /// `<property> = <value>`
    Assignment { property: String, value: String },
}

impl TaskCustomization {
    pub fn invoke<I, S>(&mut self, target: impl Into<String>, arguments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statements.push(TaskStatement::Invocation {
            target: target.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.statements.push(TaskStatement::Assignment {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn statements(&self) -> &[TaskStatement] {
        &self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugins_keep_order_and_update_version() {
        let mut build = GradleBuild::new();
        build.add_plugin("org.springframework.boot", Some("2.0.0.RELEASE"));
        build.add_plugin("java", None);
        build.add_plugin("org.springframework.boot", Some("2.1.0.RELEASE"));
        build.add_plugin("java", None);

        assert_eq!(
            build.plugins(),
            [
                GradlePlugin {
                    id: "org.springframework.boot".to_string(),
                    version: Some("2.1.0.RELEASE".to_string()),
                },
                GradlePlugin {
                    id: "java".to_string(),
                    version: None,
                },
            ]
        );
    }

    #[test]
    fn test_apply_plugin_is_idempotent() {
        let mut build = GradleBuild::new();
        build.apply_plugin("io.spring.dependency-management");
        build.apply_plugin("io.spring.dependency-management");
        assert_eq!(build.applied_plugins(), ["io.spring.dependency-management"]);
    }

    #[test]
    fn test_task_customizations_keep_insertion_order() {
        let mut build = GradleBuild::new();
        build.customize_task("test", |task| {
            task.invoke("outputs.dir", ["snippetsDir"]);
        });
        build.customize_task("asciidoctor", |task| {
            task.invoke("inputs.dir", ["snippetsDir"])
                .invoke("dependsOn", ["test"]);
        });
        build.customize_task("test", |task| {
            task.set("maxParallelForks", "2");
        });

        let names: Vec<_> = build.tasks().keys().map(String::as_str).collect();
        assert_eq!(names, ["test", "asciidoctor"]);
        assert_eq!(build.tasks()["test"].len(), 2);

        let asciidoctor = &build.tasks()["asciidoctor"][0];
        assert_eq!(
            asciidoctor.statements()[1],
            TaskStatement::Invocation {
                target: "dependsOn".to_string(),
                arguments: vec!["test".to_string()],
            }
        );
    }

    #[test]
    fn test_ext() {
        let mut build = GradleBuild::new();
        build.set_ext("snippetsDir", "file(\"build/generated-snippets\")");
        assert_eq!(
            build.ext().get("snippetsDir").map(String::as_str),
            Some("file(\"build/generated-snippets\")")
        );
    }
}
