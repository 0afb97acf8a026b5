//! Line-oriented text output with indentation.

use super::Indent;

/// Accumulates lines of generated code at the current indentation level.
///
/// Every method returns `&mut Self` so calls chain, and renderers can loop
/// over a model while writing into one builder.
///
/// ```
/// use sprout_codegen::builder::{CodeBuilder, Indent};
///
/// let mut out = CodeBuilder::new(Indent::Tab);
/// out.push_block("<parent>", "</parent>", |out| {
///     out.push_line("<groupId>org.example</groupId>");
/// });
/// assert_eq!(out.build(), "<parent>\n\t<groupId>org.example</groupId>\n</parent>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Write `line` at the current level, followed by a newline.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(&self.unit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    /// An empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append `text` as is.
    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// One level back; stays at zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// `header`, then whatever `body` writes one level deeper, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        body(self);
        self.push_dedent().push_line(close)
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
