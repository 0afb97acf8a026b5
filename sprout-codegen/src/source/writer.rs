use eyre::Result;
use sprout_core::Language;

use super::{
    Annotation, AnnotationValue, CompilationUnit, Expression, FunctionDeclaration, Statement,
};
use crate::{builder::IndentStyles, generation::ImportCollector};

/// Serializes compilation units of one language.
pub trait SourceCodeWriter {
    /// The language this writer emits.
    fn language(&self) -> Language;

    /// Render `unit` using the indent configured for this writer's language.
    ///
    /// # Errors
    ///
    /// Fails when the unit uses a construct the language cannot express.
    fn write(&self, unit: &CompilationUnit, styles: &IndentStyles) -> Result<String>;
}

/// Every fully-qualified name referenced by `unit`: annotations and their
/// class attributes, supertypes, parameter and return types, and invocation
/// targets.
pub fn collect_imports(unit: &CompilationUnit) -> ImportCollector {
    let mut imports = ImportCollector::new();
    for declaration in unit.type_declarations() {
        collect_annotations(&mut imports, declaration.annotations());
        if let Some(supertype) = declaration.extends() {
            imports.add_qualified(supertype);
        }
        for function in declaration.functions() {
            collect_function(&mut imports, function);
        }
    }
    for function in unit.top_level_functions() {
        collect_function(&mut imports, function);
    }
    imports
}

fn collect_annotations(imports: &mut ImportCollector, annotations: &[Annotation]) {
    for annotation in annotations {
        imports.add_qualified(&annotation.name);
        for (_, value) in &annotation.attributes {
            if let AnnotationValue::Class(class) = value {
                imports.add_qualified(class);
            }
        }
    }
}

fn collect_function(imports: &mut ImportCollector, function: &FunctionDeclaration) {
    collect_annotations(imports, function.annotations());
    if let Some(return_type) = function.return_type() {
        imports.add_qualified(return_type);
    }
    for parameter in function.parameters() {
        imports.add_qualified(&parameter.type_name);
    }
    for statement in function.body() {
        let (Statement::Expression(expression) | Statement::Return(expression)) = statement;
        match expression {
            Expression::Invocation { target, .. } => {
                imports.add_qualified(target);
            }
            Expression::ReifiedInvocation { function, .. } => {
                imports.add_qualified(function);
            }
        }
    }
}
