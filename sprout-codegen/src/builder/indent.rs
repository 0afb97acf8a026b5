//! Per-content-kind indentation.

use indexmap::IndexMap;

use super::{CodeBuilder, Indent};

/// Maps a content kind (`maven`, `gradle`, `java`, `kotlin`, `groovy`, ...)
/// to the indentation used when writing that kind of content.
///
/// Kinds without an override fall back to the default indent.
///
/// ```
/// use sprout_codegen::builder::{Indent, IndentStyles};
///
/// let styles = IndentStyles::new(Indent::Spaces(4)).with("gradle", Indent::Spaces(2));
/// assert_eq!(styles.for_content("gradle"), Indent::Spaces(2));
/// assert_eq!(styles.for_content("maven"), Indent::Spaces(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentStyles {
    default: Indent,
    overrides: IndexMap<String, Indent>,
}

impl IndentStyles {
    pub fn new(default: Indent) -> Self {
        Self {
            default,
            overrides: IndexMap::new(),
        }
    }

    /// Override the indent for one content kind.
    pub fn with(mut self, kind: impl Into<String>, indent: Indent) -> Self {
        self.set(kind, indent);
        self
    }

    pub fn set(&mut self, kind: impl Into<String>, indent: Indent) {
        self.overrides.insert(kind.into(), indent);
    }

    pub fn default_indent(&self) -> Indent {
        self.default
    }

    /// The indent for `kind`, or the default when none was configured.
    pub fn for_content(&self, kind: &str) -> Indent {
        self.overrides.get(kind).copied().unwrap_or(self.default)
    }

    /// A fresh [`CodeBuilder`] indented for `kind`.
    pub fn builder(&self, kind: &str) -> CodeBuilder {
        CodeBuilder::new(self.for_content(kind))
    }
}
