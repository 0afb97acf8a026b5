//! Source writers for the JVM languages.
//!
//! Each writer implements [`SourceCodeWriter`] and indents with the content
//! kind named after its language (`java`, `kotlin`, `groovy`).

mod common;
mod groovy;
mod java;
mod kotlin;

pub use groovy::GroovySourceCodeWriter;
pub use java::JavaSourceCodeWriter;
pub use kotlin::KotlinSourceCodeWriter;
use sprout_codegen::source::SourceCodeWriter;
use sprout_core::Language;

/// The writer for `language`.
pub fn writer_for(language: Language) -> Box<dyn SourceCodeWriter> {
    match language {
        Language::Java => Box::new(JavaSourceCodeWriter),
        Language::Kotlin => Box::new(KotlinSourceCodeWriter),
        Language::Groovy => Box::new(GroovySourceCodeWriter),
    }
}
