use crate::builder::CodeBuilder;

/// A part of a generated document.
pub trait Section {
    /// Whether this section has nothing to write.
    fn is_empty(&self) -> bool {
        false
    }

    /// Write the section content.
    fn write(&self, out: &mut CodeBuilder);
}

/// A section holding already-rendered text, written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSection {
    text: String,
}

impl TextSection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Section for TextSection {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn write(&self, out: &mut CodeBuilder) {
        out.push_raw(&self.text);
        if !self.text.ends_with('\n') {
            out.push_blank();
        }
    }
}

/// A section that writes itself through a closure. Never empty.
pub struct FnSection<F> {
    f: F,
}

impl<F> FnSection<F>
where
    F: Fn(&mut CodeBuilder),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Section for FnSection<F>
where
    F: Fn(&mut CodeBuilder),
{
    fn write(&self, out: &mut CodeBuilder) {
        (self.f)(out)
    }
}

/// A titled section listing items as `*` bullets.
///
/// Empty iff it has no items; an empty bulleted section writes nothing.
pub struct BulletedSection<T> {
    title: String,
    intro: String,
    items: Vec<T>,
    format: fn(&T) -> String,
}

impl<T> BulletedSection<T> {
    /// `format` renders one item, without the leading `* `.
    pub fn new(
        title: impl Into<String>,
        intro: impl Into<String>,
        format: fn(&T) -> String,
    ) -> Self {
        Self {
            title: title.into(),
            intro: intro.into(),
            items: Vec::new(),
            format,
        }
    }

    pub fn add_item(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Section for BulletedSection<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn write(&self, out: &mut CodeBuilder) {
        if self.is_empty() {
            return;
        }
        out.push_line(&format!("### {}", self.title))
            .push_line(&self.intro)
            .push_blank();
        for item in &self.items {
            out.push_line(&format!("* {}", (self.format)(item)));
        }
        out.push_blank();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BulletedSection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulletedSection")
            .field("title", &self.title)
            .field("items", &self.items)
            .finish()
    }
}
