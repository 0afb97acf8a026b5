use eyre::{Result, bail};
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

/// Writes Groovy compilation units.
///
/// Public visibility is implied and never written; class literals are bare names.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroovySourceCodeWriter;

impl SourceCodeWriter for GroovySourceCodeWriter {
    fn language(&self) -> Language {
        Language::Groovy
    }

    fn write(&self, unit: &CompilationUnit, styles: &IndentStyles) -> Result<String> {
        if let Some(function) = unit.top_level_functions().first() {
            bail!(
                "Groovy classes cannot hold top-level functions (function '{}' in '{}')",
                function.name(),
                unit.name()
            );
        }
        let mut out = styles.builder(Language::Groovy.as_str());
        common::write_preamble(&mut out, unit, "", &["java.lang", "groovy.lang"]);
        for (index, declaration) in unit.type_declarations().iter().enumerate() {
            if index > 0 {
                out.push_blank();
            }
            write_type(&mut out, declaration)?;
        }
        Ok(out.build())
    }
}

fn class_literal(name: &str) -> String {
    name.to_string()
}

fn keyword(modifier: Modifier) -> Option<&'static str> {
    match modifier {
        Modifier::Protected => Some("protected"),
        Modifier::Private => Some("private"),
        Modifier::Static => Some("static"),
        Modifier::Final => Some("final"),
        Modifier::Abstract => Some("abstract"),
        Modifier::Public | Modifier::Override | Modifier::Open => None,
    }
}

fn write_type(out: &mut CodeBuilder, declaration: &TypeDeclaration) -> Result<()> {
    for annotation in declaration.annotations() {
        out.push_line(&common::annotation(annotation, class_literal));
    }
    let modifiers = common::modifiers(declaration.modifiers().iter().filter_map(|m| keyword(*m)));
    let mut header = format!("{modifiers}class {}", declaration.name());
    if let Some(supertype) = declaration.extends() {
        header.push_str(&format!(" extends {}", simple_name(supertype)));
    }
    out.push_line(&format!("{header} {{"));
    out.push_indent().push_blank();
    for function in declaration.functions() {
        write_function(out, function)?;
        out.push_blank();
    }
    out.push_dedent().push_line("}");
    Ok(())
}

fn write_function(out: &mut CodeBuilder, function: &FunctionDeclaration) -> Result<()> {
    if function.modifiers().contains(&Modifier::Override) {
        out.push_line("@Override");
    }
    for annotation in function.annotations() {
        out.push_line(&common::annotation(annotation, class_literal));
    }
    let modifiers = common::modifiers(function.modifiers().iter().filter_map(|m| keyword(*m)));
    let return_type = function.return_type().map_or_else(|| "void".to_string(), simple_name);
    out.push_line(&format!(
        "{modifiers}{return_type} {}({}) {{",
        function.name(),
        common::typed_parameters(function.parameters())
    ));
    out.push_indent();
    for statement in function.body() {
        let line = match statement {
            Statement::Expression(expression) => expression_text(expression)?,
            Statement::Return(expression) => format!("return {}", expression_text(expression)?),
        };
        out.push_line(&line);
    }
    out.push_dedent().push_line("}");
    Ok(())
}

fn expression_text(expression: &Expression) -> Result<String> {
    match expression {
        Expression::Invocation {
            target,
            name,
            arguments,
        } => Ok(common::invocation(target, name, arguments)),
        Expression::ReifiedInvocation { function, .. } => {
            bail!("Groovy cannot express the reified call of '{function}'")
        }
    }
}
