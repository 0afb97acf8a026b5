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

/// Writes Java compilation units.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSourceCodeWriter;

impl SourceCodeWriter for JavaSourceCodeWriter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn write(&self, unit: &CompilationUnit, styles: &IndentStyles) -> Result<String> {
        if let Some(function) = unit.top_level_functions().first() {
            bail!(
                "Java has no top-level functions (function '{}' in '{}')",
                function.name(),
                unit.name()
            );
        }
        let mut out = styles.builder(Language::Java.as_str());
        common::write_preamble(&mut out, unit, ";", &["java.lang"]);
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
    format!("{name}.class")
}

fn keyword(modifier: Modifier) -> Option<&'static str> {
    match modifier {
        Modifier::Public => Some("public"),
        Modifier::Protected => Some("protected"),
        Modifier::Private => Some("private"),
        Modifier::Static => Some("static"),
        Modifier::Final => Some("final"),
        Modifier::Abstract => Some("abstract"),
        Modifier::Override | Modifier::Open => None,
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
            Statement::Expression(expression) => format!("{};", expression_text(expression)?),
            Statement::Return(expression) => format!("return {};", expression_text(expression)?),
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
            bail!("Java cannot express the reified call of '{function}'")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reified_invocation_is_rejected() {
        let mut unit = CompilationUnit::new("com.example", "App");
        unit.add_type_declaration(TypeDeclaration::new("App")).add_function(
            FunctionDeclaration::new("main").statement(Statement::Expression(Expression::reified(
                "org.springframework.boot.runApplication",
                "App",
                ["args"],
            ))),
        );
        let err = JavaSourceCodeWriter
            .write(&unit, &IndentStyles::default())
            .unwrap_err();
        assert!(err.to_string().contains("reified"));
    }

    #[test]
    fn test_top_level_function_is_rejected() {
        let mut unit = CompilationUnit::new("com.example", "App");
        unit.add_top_level_function(FunctionDeclaration::new("main"));
        assert!(JavaSourceCodeWriter.write(&unit, &IndentStyles::default()).is_err());
    }

    #[test]
    fn test_empty_class() {
        let mut unit = CompilationUnit::new("com.example", "Empty");
        unit.add_type_declaration(TypeDeclaration::new("Empty"))
            .set_modifiers([Modifier::Public]);
        let source = JavaSourceCodeWriter
            .write(&unit, &IndentStyles::default())
            .unwrap();
        assert_eq!(source, "package com.example;\n\npublic class Empty {\n\n}\n");
    }
}
