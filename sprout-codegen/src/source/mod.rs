//! Source code model and the writer abstraction.

mod model;
mod writer;

pub use model::{
    Annotation, AnnotationValue, CompilationUnit, Expression, FunctionDeclaration, Modifier,
    Parameter, SourceCode, Statement, TypeDeclaration,
};
pub use writer::{SourceCodeWriter, collect_imports};
