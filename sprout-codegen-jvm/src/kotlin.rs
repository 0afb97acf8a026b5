use eyre::Result;
use sprout_codegen::{
    builder::{CodeBuilder, IndentStyles},
    generation::simple_name,
    source::{
        CompilationUnit, Expression, FunctionDeclaration, Modifier, SourceCodeWriter, Statement,
        TypeDeclaration,
    },
};
use sprout_core::Language;

use crate::common;

/// Writes Kotlin compilation units.
///
/// Public visibility is implied and never written. A class without
/// functions is written without a body.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinSourceCodeWriter;

impl SourceCodeWriter for KotlinSourceCodeWriter {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn write(&self, unit: &CompilationUnit, styles: &IndentStyles) -> Result<String> {
        let mut out = styles.builder(Language::Kotlin.as_str());
        common::write_preamble(&mut out, unit, "", &["kotlin"]);
        let mut first = true;
        for declaration in unit.type_declarations() {
            if !std::mem::take(&mut first) {
                out.push_blank();
            }
            write_type(&mut out, declaration);
        }
        for function in unit.top_level_functions() {
            if !std::mem::take(&mut first) {
                out.push_blank();
            }
            write_function(&mut out, function);
        }
        Ok(out.build())
    }
}

fn class_literal(name: &str) -> String {
    format!("{name}::class")
}

fn keyword(modifier: Modifier) -> Option<&'static str> {
    match modifier {
        Modifier::Protected => Some("protected"),
        Modifier::Private => Some("private"),
        Modifier::Abstract => Some("abstract"),
        Modifier::Override => Some("override"),
        Modifier::Open => Some("open"),
        Modifier::Public | Modifier::Static | Modifier::Final => None,
    }
}

fn write_type(out: &mut CodeBuilder, declaration: &TypeDeclaration) {
    for annotation in declaration.annotations() {
        out.push_line(&common::annotation(annotation, class_literal));
    }
    let modifiers = common::modifiers(declaration.modifiers().iter().filter_map(|m| keyword(*m)));
    let mut header = format!("{modifiers}class {}", declaration.name());
    if let Some(supertype) = declaration.extends() {
        header.push_str(&format!(" : {}()", simple_name(supertype)));
    }
    if declaration.functions().is_empty() {
        out.push_line(&header);
        return;
    }
    out.push_line(&format!("{header} {{"));
    out.push_indent().push_blank();
    for function in declaration.functions() {
        write_function(out, function);
        out.push_blank();
    }
    out.push_dedent().push_line("}");
}

fn write_function(out: &mut CodeBuilder, function: &FunctionDeclaration) {
    for annotation in function.annotations() {
        out.push_line(&common::annotation(annotation, class_literal));
    }
    let modifiers = common::modifiers(function.modifiers().iter().filter_map(|m| keyword(*m)));
    let parameters: Vec<String> = function
        .parameters()
        .iter()
        .map(|p| format!("{}: {}", p.name, simple_name(&p.type_name)))
        .collect();
    let return_type = function
        .return_type()
        .map(|t| format!(": {}", simple_name(t)))
        .unwrap_or_default();
    out.push_line(&format!(
        "{modifiers}fun {}({}){return_type} {{",
        function.name(),
        parameters.join(", ")
    ));
    out.push_indent();
    for statement in function.body() {
        match statement {
            Statement::Expression(expression) => out.push_line(&expression_text(expression)),
            Statement::Return(expression) => {
                out.push_line(&format!("return {}", expression_text(expression)))
            }
        };
    }
    out.push_dedent().push_line("}");
}

fn expression_text(expression: &Expression) -> String {
    match expression {
        Expression::Invocation {
            target,
            name,
            arguments,
        } => common::invocation(target, name, arguments),
        Expression::ReifiedInvocation {
            function,
            type_argument,
            arguments,
        } => format!(
            "{}<{}>({})",
            simple_name(function),
            simple_name(type_argument),
            arguments.join(", ")
        ),
    }
}
