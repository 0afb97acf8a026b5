use super::{BulletedSection, Section};
use crate::builder::CodeBuilder;

/// A markdown link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    fn bullet(&self) -> String {
        format!("[{}]({})", self.label, self.href)
    }
}

/// A dependency the user must provide for the project to work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredDependency {
    pub id: String,
    pub description: String,
}

impl RequiredDependency {
    fn bullet(&self) -> String {
        format!("{}: `{}`", self.description, self.id)
    }
}

/// A piece of infrastructure that is part of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfrastructureElement {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

impl InfrastructureElement {
    fn bullet(&self) -> String {
        match &self.url {
            Some(url) => format!("[{}]({}) (`{}`)", self.name, url, self.id),
            None => format!("{} (`{}`)", self.name, self.id),
        }
    }
}

/// The "Getting Started" part of a help document.
///
/// A fixed sequence of bulleted sections followed by free-form sections.
/// Empty iff every part is empty.
pub struct GettingStartedSection {
    guides: BulletedSection<Link>,
    reference_docs: BulletedSection<Link>,
    additional_links: BulletedSection<Link>,
    required_dependencies: BulletedSection<RequiredDependency>,
    supporting_infrastructure: BulletedSection<InfrastructureElement>,
    sections: Vec<Box<dyn Section>>,
}

impl GettingStartedSection {
    pub fn new() -> Self {
        Self {
            guides: BulletedSection::new(
                "Guides",
                "The following guides illustrates how to use certain features concretely:",
                Link::bullet,
            ),
            reference_docs: BulletedSection::new(
                "Reference Documentation",
                "For further reference, please consider the following sections:",
                Link::bullet,
            ),
            additional_links: BulletedSection::new(
                "Additional Links",
                "These additional references should also help you:",
                Link::bullet,
            ),
            required_dependencies: BulletedSection::new(
                "Required Dependencies",
                "The following dependencies are required for this project to work properly:",
                RequiredDependency::bullet,
            ),
            supporting_infrastructure: BulletedSection::new(
                "Supporting Infrastructure",
                "The following elements are also part of this project:",
                InfrastructureElement::bullet,
            ),
            sections: Vec::new(),
        }
    }

    pub fn add_guide_link(
        &mut self,
        href: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.guides.add_item(Link::new(href, label));
        self
    }

    pub fn add_reference_doc_link(
        &mut self,
        href: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.reference_docs.add_item(Link::new(href, label));
        self
    }

    pub fn add_additional_link(
        &mut self,
        href: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.additional_links.add_item(Link::new(href, label));
        self
    }

    pub fn add_required_dependency(
        &mut self,
        id: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.required_dependencies.add_item(RequiredDependency {
            id: id.into(),
            description: description.into(),
        });
        self
    }

    pub fn add_supporting_infrastructure_element(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        url: Option<&str>,
    ) -> &mut Self {
        self.supporting_infrastructure.add_item(InfrastructureElement {
            id: id.into(),
            name: name.into(),
            url: url.map(str::to_string),
        });
        self
    }

    /// Append a free-form section, written after the bulleted ones.
    pub fn add_section(&mut self, section: impl Section + 'static) -> &mut Self {
        self.sections.push(Box::new(section));
        self
    }

    pub fn guides(&self) -> &BulletedSection<Link> {
        &self.guides
    }

    pub fn reference_docs(&self) -> &BulletedSection<Link> {
        &self.reference_docs
    }

    pub fn additional_links(&self) -> &BulletedSection<Link> {
        &self.additional_links
    }

    fn parts(&self) -> [&dyn Section; 5] {
        [
            &self.guides,
            &self.reference_docs,
            &self.additional_links,
            &self.required_dependencies,
            &self.supporting_infrastructure,
        ]
    }
}

impl Default for GettingStartedSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for GettingStartedSection {
    fn is_empty(&self) -> bool {
        self.parts().iter().all(|s| s.is_empty()) && self.sections.iter().all(|s| s.is_empty())
    }

    fn write(&self, out: &mut CodeBuilder) {
        if self.is_empty() {
            return;
        }
        out.push_line("# Getting Started").push_blank();
        for part in self.parts() {
            part.write(out);
        }
        for section in self.sections.iter().filter(|s| !s.is_empty()) {
            section.write(out);
        }
    }
}

/// The project's `HELP.md`: a getting-started section plus free-form sections.
///
/// ```
/// use sprout_codegen::documentation::HelpDocument;
///
/// let mut help = HelpDocument::new();
/// assert_eq!(help.render(), None);
///
/// help.getting_started().add_guide_link(
///     "https://spring.io/guides/gs/rest-service/",
///     "Building a RESTful Web Service",
/// );
/// let text = help.render().unwrap();
/// assert!(text.starts_with("# Getting Started\n\n### Guides\n"));
/// ```
#[derive(Default)]
pub struct HelpDocument {
    getting_started: GettingStartedSection,
    sections: Vec<Box<dyn Section>>,
}

impl HelpDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn getting_started(&mut self) -> &mut GettingStartedSection {
        &mut self.getting_started
    }

    /// Append a free-form section, written after "Getting Started".
    pub fn add_section(&mut self, section: impl Section + 'static) -> &mut Self {
        self.sections.push(Box::new(section));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.getting_started.is_empty() && self.sections.iter().all(|s| s.is_empty())
    }

    /// The document text, or `None` when there is nothing to write.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut out = CodeBuilder::default();
        self.getting_started.write(&mut out);
        for section in self.sections.iter().filter(|s| !s.is_empty()) {
            section.write(&mut out);
        }
        Some(out.build())
    }
}

impl std::fmt::Debug for HelpDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpDocument")
            .field("empty", &self.is_empty())
            .field("sections", &self.sections.len())
            .finish()
    }
}
