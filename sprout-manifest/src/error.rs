use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text an error points into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    fn source_code(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn syntax(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.source_code(),
            source,
        })
    }

    pub fn invalid(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Validation {
            message: message.into(),
            src: self.source_code(),
            span,
        })
    }

    /// `name` is a Java keyword used as a package segment in `context`.
    pub fn keyword(&self, name: &str, context: &str, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            name: name.to_string(),
            context: context.to_string(),
            src: self.source_code(),
            span,
        })
    }

    pub fn identifier(
        &self,
        name: &str,
        context: &str,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
            reason: reason.into(),
            src: self.source_code(),
            span,
        })
    }

    pub fn duplicate(&self, id: &str, first: SourceSpan, second: SourceSpan) -> Box<Error> {
        Box::new(Error::DuplicateDependency {
            id: id.to_string(),
            src: self.source_code(),
            first_span: first,
            second_span: second,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'sprout init' to create a sprout.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sprout.toml")]
    #[diagnostic(code(sprout::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sprout::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(sprout::reserved_keyword),
        help("the {context} must not contain Java keywords, e.g. use '{name}app' instead")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(sprout::invalid_identifier),
        help("{reason}. Each segment must start with a letter or underscore and contain only letters, numbers and underscores.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate dependency '{id}'")]
    #[diagnostic(
        code(sprout::duplicate_dependency),
        help("remove one of the entries or give it a different id")
    )]
    DuplicateDependency {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        id: String,
    },
}
