//! Pieces shared by the three writers.

use sprout_codegen::{
    builder::CodeBuilder,
    generation::{simple_name, split_qualified},
    source::{Annotation, AnnotationValue, CompilationUnit, Parameter, collect_imports},
};

/// Write the package declaration and the imports of `unit`.
///
/// Types of the unit's own package and of `implicit` packages are not imported.
pub(crate) fn write_preamble(
    out: &mut CodeBuilder,
    unit: &CompilationUnit,
    terminator: &str,
    implicit: &[&str],
) {
    if !unit.package().is_empty() {
        out.push_line(&format!("package {}{terminator}", unit.package()));
        out.push_blank();
    }
    let imports: Vec<String> = collect_imports(unit)
        .qualified_names()
        .into_iter()
        .filter(|name| match split_qualified(name) {
            Some((package, _)) => package != unit.package() && !implicit.contains(&package),
            None => false,
        })
        .collect();
    if !imports.is_empty() {
        for import in &imports {
            out.push_line(&format!("import {import}{terminator}"));
        }
        out.push_blank();
    }
}

/// `@Name`, `@Name(value)` or `@Name(a = x, b = y)`.
pub(crate) fn annotation(annotation: &Annotation, class_literal: fn(&str) -> String) -> String {
    let name = simple_name(&annotation.name);
    let attributes: Vec<(&str, String)> = annotation
        .attributes
        .iter()
        .map(|(name, value)| {
            let value = match value {
                AnnotationValue::Class(class) => class_literal(&simple_name(class)),
                AnnotationValue::Raw(raw) => raw.clone(),
            };
            (name.as_str(), value)
        })
        .collect();
    match attributes.as_slice() {
        [] => format!("@{name}"),
        [("value", value)] => format!("@{name}({value})"),
        _ => {
            let attributes: Vec<String> = attributes
                .iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect();
            format!("@{name}({})", attributes.join(", "))
        }
    }
}

/// Parameters in `Type name` form.
pub(crate) fn typed_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}", simple_name(&p.type_name), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn invocation(target: &str, name: &str, arguments: &[String]) -> String {
    format!("{}.{name}({})", simple_name(target), arguments.join(", "))
}

/// `modifier modifier ` with a trailing space, or nothing.
pub(crate) fn modifiers<'a>(keywords: impl IntoIterator<Item = &'a str>) -> String {
    keywords.into_iter().map(|k| format!("{k} ")).collect()
}
